use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while validating a table style name.
#[derive(Error, Debug, PartialEq)]
pub enum StyleNameError {
    #[error("Invalid table style '{0}', expected TableStyleLight1-21, TableStyleMedium1-28 or TableStyleDark1-11")]
    UnknownStyle(String),
}

/// The three built-in table style families.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TableStyleFamily {
    Light,
    Medium,
    Dark,
}

impl TableStyleFamily {
    const ALL: [TableStyleFamily; 3] = [TableStyleFamily::Light, TableStyleFamily::Medium, TableStyleFamily::Dark];

    /// Canonical spelling as it appears in the style name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TableStyleFamily::Light => "Light",
            TableStyleFamily::Medium => "Medium",
            TableStyleFamily::Dark => "Dark",
        }
    }

    /// Number of styles in the family.
    pub const fn count(&self) -> u8 {
        match self {
            TableStyleFamily::Light => 21,
            TableStyleFamily::Medium => 28,
            TableStyleFamily::Dark => 11,
        }
    }
}

/// A member of the closed set of built-in table styles. Values of this type
/// can only be obtained through validation, so they are always canonical.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TableStyleName {
    family: TableStyleFamily,
    number: u8,
}

impl TableStyleName {
    const PREFIX: &'static str = "TableStyle";

    /// Looks a style up by family and number, e.g. `(Medium, 2)`.
    pub fn new(family: TableStyleFamily, number: u8) -> Option<Self> {
        (1..=family.count())
            .contains(&number)
            .then_some(TableStyleName { family, number })
    }

    /// Validates a style name, ignoring case.
    pub fn parse(name: &str) -> Result<Self, StyleNameError> {
        Self::lookup(name).ok_or_else(|| StyleNameError::UnknownStyle(name.to_owned()))
    }

    fn lookup(name: &str) -> Option<Self> {
        let rest = strip_prefix_ignore_case(name, Self::PREFIX)?;
        TableStyleFamily::ALL.into_iter().find_map(|family| {
            let digits = strip_prefix_ignore_case(rest, family.as_str())?;
            // Only the canonical spelling of the number is accepted, so
            // "Light05" or "Light+5" never alias "Light5".
            if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            Self::new(family, digits.parse().ok()?)
        })
    }

    /// Every valid style, in family then number order.
    pub fn all() -> impl Iterator<Item = TableStyleName> {
        TableStyleFamily::ALL
            .into_iter()
            .flat_map(|family| (1..=family.count()).map(move |number| TableStyleName { family, number }))
    }

    pub fn family(&self) -> TableStyleFamily {
        self.family
    }

    pub fn number(&self) -> u8 {
        self.number
    }
}

impl Default for TableStyleName {
    /// `TableStyleLight9`, the style spreadsheet applications offer first.
    fn default() -> Self {
        TableStyleName {
            family: TableStyleFamily::Light,
            number: 9,
        }
    }
}

impl Display for TableStyleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", Self::PREFIX, self.family.as_str(), self.number)
    }
}

impl FromStr for TableStyleName {
    type Err = StyleNameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::parse(name)
    }
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &value[prefix.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_case() {
        assert_eq!(TableStyleName::parse("tablestylelight5").unwrap().to_string(), "TableStyleLight5");
        assert_eq!(TableStyleName::parse("TABLESTYLEMEDIUM28").unwrap().to_string(), "TableStyleMedium28");
        assert_eq!("TableStyleDark1".parse::<TableStyleName>().unwrap().to_string(), "TableStyleDark1");
    }

    #[test]
    fn rejects_near_matches() {
        for name in [
            "TableStyleLight99",
            "TableStyleLight0",
            "TableStyleLight05",
            "TableStyleLight22",
            "TableStyleMedium29",
            "TableStyleDark12",
            "TableStyleLight",
            "TableStyleLight 5",
            " TableStyleLight5",
            "TableStyleLight+5",
            "TableStylePale1",
            "Light5",
            "none",
            "",
        ] {
            assert_eq!(
                TableStyleName::parse(name),
                Err(StyleNameError::UnknownStyle(name.to_owned())),
                "{}",
                name
            );
        }
    }

    #[test]
    fn closed_set_has_sixty_members() {
        let names: Vec<String> = TableStyleName::all().map(|style| style.to_string()).collect();
        assert_eq!(names.len(), 60);
        assert_eq!(names.first().map(String::as_str), Some("TableStyleLight1"));
        assert_eq!(names.last().map(String::as_str), Some("TableStyleDark11"));
        for name in &names {
            assert_eq!(&TableStyleName::parse(&name.to_lowercase()).unwrap().to_string(), name);
        }
    }

    #[test]
    fn default_style() {
        assert_eq!(TableStyleName::default().to_string(), "TableStyleLight9");
        assert_eq!(TableStyleName::new(TableStyleFamily::Dark, 12), None);
    }
}
