//! Validation rules for form fields

/// Validation rules for a field, extracted from the property schema
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

/// Ошибка проверки одного поля формы
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} не может быть пустым", field_label));
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "{} должен содержать минимум {} символов",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!(
                    "{} не должен превышать {} символов",
                    field_label, max
                ));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} должен быть не менее {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} должен быть не более {}", field_label, max));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let rules = FieldRules {
            required: true,
            ..FieldRules::none()
        };
        assert!(rules.validate_string("  ", "Имя").is_err());
        assert!(rules.validate_string("Иван", "Имя").is_ok());
    }

    #[test]
    fn test_length_counts_chars() {
        let rules = FieldRules {
            max_length: Some(4),
            ..FieldRules::none()
        };
        assert!(rules.validate_string("Иван", "Имя").is_ok());
        assert_eq!(
            rules.validate_string("Иванов", "Имя").unwrap_err(),
            "Имя не должен превышать 4 символов"
        );
    }

    #[test]
    fn test_number_range() {
        let rules = FieldRules {
            min: Some(0.0),
            max: Some(10.0),
            ..FieldRules::none()
        };
        assert!(rules.validate_number(5.0, "Кол-во").is_ok());
        assert_eq!(
            rules.validate_number(-1.0, "Кол-во").unwrap_err(),
            "Кол-во должен быть не менее 0"
        );
        assert!(rules.validate_number(11.0, "Кол-во").is_err());
    }
}
