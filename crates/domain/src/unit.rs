use strum::{Display, EnumString};

/// Label attached to every load in a plan. Values are never converted between units.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, PartialEq)]
#[strum(ascii_case_insensitive)]
pub enum Unit {
    #[default]
    #[strum(to_string = "kg", serialize = "kilogram", serialize = "kilograms")]
    Kilogram,
    #[strum(
        to_string = "lbs",
        serialize = "lb",
        serialize = "pound",
        serialize = "pounds"
    )]
    Pound,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("kg", Unit::Kilogram)]
    #[case("Kilograms", Unit::Kilogram)]
    #[case("lbs", Unit::Pound)]
    #[case("LB", Unit::Pound)]
    #[case("pound", Unit::Pound)]
    fn test_unit_from_str(#[case] input: &str, #[case] expected: Unit) {
        assert_eq!(input.parse::<Unit>(), Ok(expected));
    }

    #[test]
    fn test_unit_from_str_invalid() {
        assert!("stone".parse::<Unit>().is_err());
    }

    #[rstest]
    #[case(Unit::Kilogram, "kg")]
    #[case(Unit::Pound, "lbs")]
    fn test_unit_display(#[case] unit: Unit, #[case] expected: &str) {
        assert_eq!(unit.to_string(), expected);
    }

    #[test]
    fn test_unit_default() {
        assert_eq!(Unit::default(), Unit::Kilogram);
    }
}
