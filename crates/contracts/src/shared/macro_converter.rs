//! Упрощённая конвертация VBA-макросов Excel в Python-подобный код.
//!
//! Построчная цепочка замен по регулярным выражениям, без разбора грамматики.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const HEADER: &str = "# Конвертировано из VBA/макроса\n\n";
pub const FOOTER: &str =
    "\n# Примечание: это базовая конвертация, может потребоваться ручная доработка";

#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    #[error("Введите код VBA/макроса для конвертации")]
    EmptyInput,
}

struct Rule {
    pattern: Regex,
    replacement: &'static str,
    all: bool,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str, all: bool) -> Option<Self> {
        match Regex::new(pattern) {
            Ok(pattern) => Some(Self {
                pattern,
                replacement,
                all,
            }),
            Err(e) => {
                log::error!("Invalid converter pattern {}: {}", pattern, e);
                None
            }
        }
    }

    fn apply(&self, line: &str) -> String {
        if self.all {
            self.pattern.replace_all(line, self.replacement).into_owned()
        } else {
            self.pattern.replace(line, self.replacement).into_owned()
        }
    }
}

// Порядок важен: ElseIf раньше If, Else и End If только целой строкой
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    [
        (
            r"(?i)^(\s*)(?:(?:Public|Private)\s+)?Sub\s+(\w+)\s*\((.*)\)",
            "${1}def ${2}(${3}):",
            false,
        ),
        (r"(?i)^\s*End\s+Sub\b.*$", "", false),
        (
            r"(?i)^(\s*)(?:(?:Public|Private)\s+)?Function\s+(\w+)\s*\((.*?)\)(?:\s+As\s+\w+)?",
            "${1}def ${2}(${3}):",
            false,
        ),
        (r"(?i)^\s*End\s+Function\b.*$", "", false),
        (
            r"(?i)\bDim\s+(\w+)\s+As\s+(\w+)",
            "${1} = None  # was ${2} in VBA",
            false,
        ),
        (r"(?i)\bSet\s+(\w+)\s*=\s*(.*)", "${1} = ${2}", false),
        (r"(?i)\bElseIf\s+(.*?)\s+Then\b", "elif ${1}:", false),
        (r"(?i)\bIf\s+(.*?)\s+Then\b", "if ${1}:", false),
        (r"(?i)^(\s*)Else\s*$", "${1}else:", false),
        (r"(?i)^\s*End\s+If\b.*$", "", false),
        (
            r"(?i)\bFor\s+(\w+)\s*=\s*(\w+)\s+To\s+(\w+)",
            "for ${1} in range(${2}, ${3} + 1):",
            false,
        ),
        (r"(?i)^\s*Next\b.*$", "", false),
        (r"(?i)(\w+)\.Value\b", "${1}", true),
        (r"'", "#", true),
    ]
    .into_iter()
    .filter_map(|(pattern, replacement, all)| Rule::new(pattern, replacement, all))
    .collect()
});

/// Одна строка VBA после цепочки замен
pub fn convert_line(line: &str) -> String {
    RULES
        .iter()
        .fold(line.trim_end().to_string(), |acc, rule| rule.apply(&acc))
}

/// Конвертировать текст макроса
pub fn convert(vba: &str) -> Result<String, ConvertError> {
    if vba.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let mut output = String::from(HEADER);
    for line in vba.lines() {
        let converted = convert_line(line);
        let trimmed = converted.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('#') {
            output.push_str(&converted);
        } else {
            output.push_str("    ");
            output.push_str(&converted);
        }
        output.push('\n');
    }
    output.push_str(FOOTER);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_error() {
        assert_eq!(convert("  \n\t"), Err(ConvertError::EmptyInput));
    }

    #[test]
    fn test_line_rules() {
        assert_eq!(convert_line("Sub Total(a, b)"), "def Total(a, b):");
        assert_eq!(convert_line("Private Sub Calc()"), "def Calc():");
        assert_eq!(convert_line("End Sub"), "");
        assert_eq!(convert_line("Function Net(price, qty) As Double"), "def Net(price, qty):");
        assert_eq!(convert_line("Public Function Tax(x)"), "def Tax(x):");
        assert_eq!(convert_line("End Function"), "");
        assert_eq!(convert_line("Dim x As Integer"), "x = None  # was Integer in VBA");
        assert_eq!(convert_line("Set ws = ActiveSheet"), "ws = ActiveSheet");
        assert_eq!(convert_line("If x > 1 Then"), "if x > 1:");
        assert_eq!(convert_line("ElseIf x < 0 Then"), "elif x < 0:");
        assert_eq!(convert_line("  Else"), "  else:");
        assert_eq!(convert_line("End If"), "");
        assert_eq!(convert_line("For i = 1 To 10"), "for i in range(1, 10 + 1):");
        assert_eq!(convert_line("Next i"), "");
        assert_eq!(convert_line("total = cell.Value + other.Value"), "total = cell + other");
        assert_eq!(convert_line("' comment"), "# comment");
    }

    #[test]
    fn test_words_containing_keywords_are_untouched() {
        assert_eq!(convert_line("Elsewhere = 1"), "Elsewhere = 1");
        assert_eq!(convert_line("NextValue = 2"), "NextValue = 2");
    }

    #[test]
    fn test_convert_layout() {
        let vba = "Sub Hello()\n' greet\n\n  MsgBox \"Hi\"\nEnd Sub\n";
        let python = convert(vba).unwrap();
        assert_eq!(
            python,
            format!(
                "{}    def Hello():\n# greet\n      MsgBox \"Hi\"\n{}",
                HEADER, FOOTER
            )
        );
    }
}
