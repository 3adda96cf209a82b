use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of animal a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dog,
    Cat,
    Fish,
}

impl Category {
    /// Every category, in catalog order.
    pub const ALL: [Category; 3] = [Category::Dog, Category::Cat, Category::Fish];

    /// Lowercase token used in query strings (`dog`, `cat`, `fish`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Dog => "dog",
            Category::Cat => "cat",
            Category::Fish => "fish",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    /// Accepts the singular token or the plural page slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dog" | "dogs" => Ok(Category::Dog),
            "cat" | "cats" => Ok(Category::Cat),
            "fish" | "fishes" => Ok(Category::Fish),
            _ => Err(ParseEnumError::UnknownCategory {
                value: s.to_string(),
            }),
        }
    }
}

/// Sex of an animal. Displayed with the Portuguese labels used by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "Masculino")]
    Male,
    #[serde(rename = "Feminino")]
    Female,
}

impl Sex {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Masculino",
            Sex::Female => "Feminino",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sex {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "masculino" | "male" => Ok(Sex::Male),
            "feminino" | "female" => Ok(Sex::Female),
            _ => Err(ParseEnumError::UnknownSex {
                value: s.to_string(),
            }),
        }
    }
}

/// Error returned when a token does not name a known category or sex.
///
/// Request handling treats this as "filter absent"; the error only exists so
/// that callers who want strict validation can have it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    UnknownCategory { value: String },
    UnknownSex { value: String },
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseEnumError::UnknownCategory { value } => {
                write!(f, "unknown pet category '{value}' (expected dog, cat or fish)")
            }
            ParseEnumError::UnknownSex { value } => {
                write!(f, "unknown sex '{value}' (expected Masculino or Feminino)")
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}

/// One animal in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetRecord {
    pub category: Category,
    /// File name of the picture under `public/images`
    pub image: String,
    /// Breed display name; several records share the same breed
    pub breed: String,
    pub color: String,
    pub sex: Sex,
    /// Given name of the individual animal, when known
    pub name: Option<String>,
}

impl PetRecord {
    #[must_use]
    pub fn new(
        category: Category,
        image: &str,
        breed: &str,
        color: &str,
        sex: Sex,
        name: Option<&str>,
    ) -> Self {
        Self {
            category,
            image: image.to_string(),
            breed: breed.to_string(),
            color: color.to_string(),
            sex,
            name: name.map(str::to_string),
        }
    }

    /// Case-insensitive containment test on the breed name.
    ///
    /// `needle` must already be lowercased.
    #[inline]
    pub(crate) fn breed_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.breed.to_lowercase().contains(needle)
    }

    /// Case-insensitive containment test on the color.
    ///
    /// `needle` must already be lowercased.
    #[inline]
    pub(crate) fn color_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.color.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_accepts_slugs() {
        assert_eq!("dog".parse::<Category>().unwrap(), Category::Dog);
        assert_eq!("Cats".parse::<Category>().unwrap(), Category::Cat);
        assert_eq!(" fishes ".parse::<Category>().unwrap(), Category::Fish);
        assert!("bird".parse::<Category>().is_err());
    }

    #[test]
    fn test_sex_parse_labels() {
        assert_eq!("Masculino".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("feminino".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("female".parse::<Sex>().unwrap(), Sex::Female);
        let err = "Outro".parse::<Sex>().unwrap_err();
        assert_eq!(
            err,
            ParseEnumError::UnknownSex {
                value: "Outro".to_string()
            }
        );
        assert!(err.to_string().contains("Outro"));
    }

    #[test]
    fn test_sex_serializes_with_label() {
        assert_eq!(serde_json::to_string(&Sex::Female).unwrap(), "\"Feminino\"");
        assert_eq!(serde_json::to_string(&Category::Fish).unwrap(), "\"fish\"");
    }

    #[test]
    fn test_breed_match_is_case_insensitive() {
        let pet = PetRecord::new(Category::Cat, "x.jpg", "Siamês", "Preto", Sex::Male, None);
        assert!(pet.breed_contains("siam"));
        assert!(pet.breed_contains("siamês"));
        assert!(pet.breed_contains(""));
        assert!(!pet.breed_contains("persa"));
    }
}
