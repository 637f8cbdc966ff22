#[cfg(feature = "cli")]
pub mod cli;

use crate::core::roster::founding_animals;
use crate::domain::model::{Animal, Bird, Elephant, Lion};
use crate::domain::ports::Creature;
use crate::utils::error::{Result, ZooError};
use crate::utils::validation::{
    validate_measurement, validate_non_empty_string, validate_range, validate_required_field,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_AGE: u32 = 200;

/// One `[[animals]]` entry of a roster file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnimalSpec {
    Lion {
        name: String,
        age: u32,
        mane_length: u32,
    },
    Elephant {
        name: String,
        age: u32,
        tusk_length: f64,
    },
    Bird {
        name: String,
        age: u32,
        wingspan: f64,
        can_fly: bool,
    },
}

impl AnimalSpec {
    pub fn name(&self) -> &str {
        match self {
            AnimalSpec::Lion { name, .. }
            | AnimalSpec::Elephant { name, .. }
            | AnimalSpec::Bird { name, .. } => name,
        }
    }

    fn validate_at(&self, index: usize) -> Result<()> {
        let field = |suffix: &str| format!("animals[{}].{}", index, suffix);
        match self {
            AnimalSpec::Lion { name, age, .. } => {
                validate_non_empty_string(&field("name"), name)?;
                validate_range(&field("age"), *age, 0, MAX_AGE)?;
            }
            AnimalSpec::Elephant {
                name,
                age,
                tusk_length,
            } => {
                validate_non_empty_string(&field("name"), name)?;
                validate_range(&field("age"), *age, 0, MAX_AGE)?;
                validate_measurement(&field("tusk_length"), *tusk_length)?;
            }
            AnimalSpec::Bird {
                name, age, wingspan, ..
            } => {
                validate_non_empty_string(&field("name"), name)?;
                validate_range(&field("age"), *age, 0, MAX_AGE)?;
                validate_measurement(&field("wingspan"), *wingspan)?;
            }
        }
        Ok(())
    }
}

impl Validate for AnimalSpec {
    fn validate(&self) -> Result<()> {
        self.validate_at(0)
    }
}

impl From<AnimalSpec> for Animal {
    fn from(spec: AnimalSpec) -> Self {
        match spec {
            AnimalSpec::Lion {
                name,
                age,
                mane_length,
            } => Lion::new(name, age, mane_length).into(),
            AnimalSpec::Elephant {
                name,
                age,
                tusk_length,
            } => Elephant::new(name, age, tusk_length).into(),
            AnimalSpec::Bird {
                name,
                age,
                wingspan,
                can_fly,
            } => Bird::new(name, age, wingspan, can_fly).into(),
        }
    }
}

impl From<&Animal> for AnimalSpec {
    fn from(animal: &Animal) -> Self {
        match animal {
            Animal::Lion(lion) => AnimalSpec::Lion {
                name: lion.name().to_string(),
                age: lion.age(),
                mane_length: lion.mane_length(),
            },
            Animal::Elephant(elephant) => AnimalSpec::Elephant {
                name: elephant.name().to_string(),
                age: elephant.age(),
                tusk_length: elephant.tusk_length(),
            },
            Animal::Bird(bird) => AnimalSpec::Bird {
                name: bird.name().to_string(),
                age: bird.age(),
                wingspan: bird.wingspan(),
                can_fly: bird.can_fly(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZooConfig {
    pub animals: Option<Vec<AnimalSpec>>,
}

impl Default for ZooConfig {
    fn default() -> Self {
        Self {
            animals: Some(founding_animals().iter().map(AnimalSpec::from).collect()),
        }
    }
}

impl ZooConfig {
    /// 從 TOML 檔案載入名冊
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ZooError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${KEEPER_NAME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ZooError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn animal_specs(&self) -> Result<&[AnimalSpec]> {
        validate_required_field("animals", &self.animals).map(Vec::as_slice)
    }

    /// Validates every entry and builds the animals in file order.
    pub fn build_roster(&self) -> Result<Vec<Animal>> {
        self.validate()?;
        let specs = self.animal_specs()?;
        Ok(specs.iter().cloned().map(Animal::from).collect())
    }
}

impl Validate for ZooConfig {
    fn validate(&self) -> Result<()> {
        for (index, spec) in self.animal_specs()?.iter().enumerate() {
            spec.validate_at(index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_founding_roster() {
        let config = ZooConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.build_roster().unwrap(), founding_animals());
    }

    #[test]
    fn test_parse_roster() {
        let toml = r#"
            [[animals]]
            kind = "elephant"
            name = "Dumbo"
            age = 10
            tusk_length = 2.5

            [[animals]]
            kind = "bird"
            name = "Pengu"
            age = 3
            wingspan = 10.0
            can_fly = false
        "#;
        let config = ZooConfig::from_toml_str(toml).unwrap();
        let roster = config.build_roster().unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0], Animal::from(Elephant::new("Dumbo", 10, 2.5)));
        assert_eq!(roster[1].specialty(), "Pengu cannot fly (flightless bird).");
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let toml = r#"
            [[animals]]
            kind = "dragon"
            name = "Smaug"
            age = 171
        "#;
        assert!(matches!(
            ZooConfig::from_toml_str(toml),
            Err(ZooError::TomlError(_))
        ));
    }

    #[test]
    fn test_missing_animals_table() {
        let config = ZooConfig::from_toml_str("").unwrap();
        assert!(matches!(
            config.build_roster(),
            Err(ZooError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validation_reports_entry_index() {
        let config = ZooConfig {
            animals: Some(vec![
                AnimalSpec::Lion {
                    name: "Simba".to_string(),
                    age: 5,
                    mane_length: 30,
                },
                AnimalSpec::Bird {
                    name: "Tweety".to_string(),
                    age: 2,
                    wingspan: -15.0,
                    can_fly: true,
                },
            ]),
        };
        match config.validate() {
            Err(ZooError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "animals[1].wingspan")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_blank_name_rejected() {
        let spec = AnimalSpec::Elephant {
            name: "  ".to_string(),
            age: 10,
            tusk_length: 2.5,
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("ZOO_TEST_LION_NAME", "Mufasa");
        let toml = r#"
            [[animals]]
            kind = "lion"
            name = "${ZOO_TEST_LION_NAME}"
            age = 12
            mane_length = 40
        "#;
        let config = ZooConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.animal_specs().unwrap()[0].name(), "Mufasa");
    }

    #[test]
    fn test_unset_env_var_left_in_place() {
        let toml = r#"
            [[animals]]
            kind = "lion"
            name = "${ZOO_TEST_SURELY_UNSET}"
            age = 1
            mane_length = 2
        "#;
        let config = ZooConfig::from_toml_str(toml).unwrap();
        assert_eq!(
            config.animal_specs().unwrap()[0].name(),
            "${ZOO_TEST_SURELY_UNSET}"
        );
    }
}
