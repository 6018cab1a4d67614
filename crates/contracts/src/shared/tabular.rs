//! Импорт табличных данных (Excel, CSV, буфер обмена) в элемент-таблицу

use crate::domain::a001_template::element::{
    Element, ElementContent, Position, Size, TableContent,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ImportError {
    #[error("Нет данных для импорта")]
    Empty,

    #[error("Незакрытая кавычка в строке {line}")]
    UnterminatedQuote { line: usize },
}

/// Прямоугольная сетка ячеек; первая строка — заголовки
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGrid {
    pub source: String,
    rows: Vec<Vec<String>>,
}

impl SheetGrid {
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn headers(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Строки данных без заголовка
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

/// Нормализация сырой сетки: обрезка пробелов, выравнивание длины строк,
/// отбрасывание пустых строк в конце
pub fn from_raw(rows: Vec<Vec<String>>, source: impl Into<String>) -> Result<SheetGrid, ImportError> {
    let mut rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| row.into_iter().map(|cell| cell.trim().to_string()).collect())
        .collect();

    while rows
        .last()
        .is_some_and(|row: &Vec<String>| row.iter().all(String::is_empty))
    {
        rows.pop();
    }
    if rows.is_empty() {
        return Err(ImportError::Empty);
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in rows.iter_mut() {
        row.resize(width, String::new());
    }

    Ok(SheetGrid {
        source: source.into(),
        rows,
    })
}

fn detect_delimiter(text: &str) -> char {
    if text.contains('\t') {
        return '\t';
    }
    let first_line = text.lines().next().unwrap_or_default();
    if first_line.matches(';').count() > first_line.matches(',').count() {
        ';'
    } else {
        ','
    }
}

/// Разбор вставленного текста: TSV (копирование из Excel), иначе CSV с `,` или `;`
pub fn parse_pasted(text: &str, source: impl Into<String>) -> Result<SheetGrid, ImportError> {
    let delimiter = detect_delimiter(text);
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut quote_line = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cell.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if cell.is_empty() => {
                in_quotes = true;
                quote_line = line;
            }
            '\r' if !in_quotes => {}
            '\n' if !in_quotes => {
                row.push(std::mem::take(&mut cell));
                rows.push(std::mem::take(&mut row));
                line += 1;
            }
            c if c == delimiter && !in_quotes => row.push(std::mem::take(&mut cell)),
            c => {
                if c == '\n' {
                    line += 1;
                }
                cell.push(c);
            }
        }
    }

    if in_quotes {
        return Err(ImportError::UnterminatedQuote { line: quote_line });
    }
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }

    from_raw(rows, source)
}

/// Демонстрационный лист сотрудников
pub fn sample_sheet() -> SheetGrid {
    let rows = [
        ["Name", "Age", "Email", "Department", "Salary"],
        ["John Doe", "32", "john@example.com", "Engineering", "85000"],
        ["Jane Smith", "28", "jane@example.com", "Marketing", "72000"],
        ["Bob Johnson", "45", "bob@example.com", "Finance", "95000"],
        ["Alice Brown", "37", "alice@example.com", "HR", "68000"],
        ["Charlie Wilson", "29", "charlie@example.com", "Engineering", "78000"],
    ];
    SheetGrid {
        source: "employees.xlsx".to_string(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    }
}

/// Элемент-таблица из сетки
pub fn to_table_element(grid: &SheetGrid) -> Element {
    Element::new(
        ElementContent::Table(TableContent {
            rows: Some(grid.row_count() as u32),
            cols: Some(grid.col_count() as u32),
            data: grid.rows.clone(),
            headers: true,
            footer: false,
            border_width: Some(1.0),
            border_color: Some(TableContent::DEFAULT_BORDER_COLOR.to_string()),
        }),
        Position::new(50.0, 50.0),
        Size::new(600.0, 300.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_separated() {
        let grid = parse_pasted("Name\tAge\nJohn\t32\nJane\t28\n\n", "paste").unwrap();
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.col_count(), 2);
        assert_eq!(grid.headers(), &["Name".to_string(), "Age".to_string()]);
        assert_eq!(grid.body()[1][0], "Jane");
    }

    #[test]
    fn test_parse_csv_with_quotes() {
        let grid = parse_pasted("a,b\r\n\"x, y\",\"say \"\"hi\"\"\"\r\n", "data.csv").unwrap();
        assert_eq!(grid.rows()[1], vec!["x, y".to_string(), "say \"hi\"".to_string()]);
    }

    #[test]
    fn test_parse_semicolon() {
        let grid = parse_pasted("a;b;c\n1;2;3", "data.csv").unwrap();
        assert_eq!(grid.col_count(), 3);
        assert_eq!(grid.rows()[1][2], "3");
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let grid = from_raw(
            vec![vec!["a".into()], vec!["1".into(), " 2 ".into()]],
            "x",
        )
        .unwrap();
        assert_eq!(grid.rows()[0], vec!["a".to_string(), String::new()]);
        assert_eq!(grid.rows()[1][1], "2");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_pasted("\n\n", "paste"), Err(ImportError::Empty));
        assert_eq!(from_raw(vec![vec![String::new()]], "x"), Err(ImportError::Empty));
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(
            parse_pasted("a,\"b\nc", "paste"),
            Err(ImportError::UnterminatedQuote { line: 1 })
        );
        // Номер строки, где кавычка открылась, а не где закончился текст
        assert_eq!(
            parse_pasted("a\tb\n\"open\nx\ny", "paste"),
            Err(ImportError::UnterminatedQuote { line: 2 })
        );
        assert_eq!(
            parse_pasted("\"ok\nstill\",1\n2,\"open", "paste"),
            Err(ImportError::UnterminatedQuote { line: 3 })
        );
    }

    #[test]
    fn test_sample_sheet_to_table() {
        let element = to_table_element(&sample_sheet());
        assert_eq!(element.position, Position::new(50.0, 50.0));
        let ElementContent::Table(table) = &element.content else {
            panic!("expected table");
        };
        assert_eq!((table.row_count(), table.col_count()), (6, 5));
        assert!(table.headers);
        assert_eq!(table.cell(1, 4), "85000");
        assert_eq!(table.border_color(), "#cccccc");
    }
}
