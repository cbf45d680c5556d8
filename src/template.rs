// Instruction/solution templates. Placeholders use the `@` delimiter because
// the host document format reserves `$` for math mode: `@name` or `@{name}`
// substitutes the field, `@@` is a literal `@`. A placeholder naming a field
// the data mapping does not carry is a fatal error, never a silent blank.

use serde::Serialize;
use thiserror::Error;

use crate::value::Data;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template references field `{field}` which the generated data does not contain")]
    MissingField { field: String },
    #[error("dangling `@` at byte {position}; use `@@` for a literal `@`")]
    InvalidPlaceholder { position: usize },
}

/// One rendered subproblem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedText {
    pub instruction: String,
    pub solution: String,
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Substitutes every placeholder in `template` from `data`.
pub fn substitute(template: &str, data: &Data) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;
    while let Some(at) = rest.find('@') {
        out.push_str(&rest[..at]);
        let after = &rest[at + 1..];
        let consumed;
        if after.starts_with('@') {
            out.push('@');
            consumed = 2;
        } else if let Some(tail) = after.strip_prefix('{') {
            let close = tail.find('}').ok_or(TemplateError::InvalidPlaceholder {
                position: offset + at,
            })?;
            let name = &tail[..close];
            if name.is_empty() || !name.chars().all(is_name_char) {
                return Err(TemplateError::InvalidPlaceholder {
                    position: offset + at,
                });
            }
            out.push_str(&lookup(data, name)?);
            consumed = 2 + close + 1;
        } else {
            let name_len = after
                .char_indices()
                .take_while(|&(i, c)| {
                    if i == 0 {
                        is_name_start(c)
                    } else {
                        is_name_char(c)
                    }
                })
                .count();
            if name_len == 0 {
                return Err(TemplateError::InvalidPlaceholder {
                    position: offset + at,
                });
            }
            let name = &after[..name_len];
            out.push_str(&lookup(data, name)?);
            consumed = 1 + name_len;
        }
        offset += at + consumed;
        rest = &rest[at + consumed..];
    }
    out.push_str(rest);
    Ok(out)
}

fn lookup(data: &Data, name: &str) -> Result<String, TemplateError> {
    data.get(name)
        .map(|value| value.to_string())
        .ok_or_else(|| TemplateError::MissingField {
            field: name.to_string(),
        })
}

/// Renders one `{instruction, solution}` record per data mapping, preserving
/// list order.
pub fn render(
    instruction: &str,
    solution: &str,
    data: &[Data],
) -> Result<Vec<RenderedText>, TemplateError> {
    data.iter()
        .map(|datum| {
            Ok(RenderedText {
                instruction: substitute(instruction, datum)?,
                solution: substitute(solution, datum)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Data {
        data! {
            "stevec" => 3,
            "imenovalec" => 4,
            "izraz" => "x^{2} - 1",
        }
    }

    #[test]
    fn plain_and_braced_placeholders() {
        let data = sample();
        assert_eq!(
            substitute("Okrajšaj $\\frac{@stevec}{@imenovalec}$.", &data).unwrap(),
            "Okrajšaj $\\frac{3}{4}$."
        );
        assert_eq!(substitute("@{izraz}a", &data).unwrap(), "x^{2} - 1a");
    }

    #[test]
    fn placeholder_ends_at_non_name_character() {
        let data = sample();
        assert_eq!(substitute("$@stevec$", &data).unwrap(), "$3$");
        assert_eq!(substitute("@stevec,@stevec", &data).unwrap(), "3,3");
    }

    #[test]
    fn escaped_delimiter() {
        let data = sample();
        assert_eq!(substitute("a@@b", &data).unwrap(), "a@b");
        assert_eq!(substitute("@@stevec", &data).unwrap(), "@stevec");
    }

    #[test]
    fn missing_field_is_fatal() {
        let err = substitute("$@neznano$", &sample()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingField {
                field: "neznano".to_string()
            }
        );
    }

    #[test]
    fn dangling_delimiter_is_fatal() {
        assert!(matches!(
            substitute("cena: 3 @ 4", &sample()),
            Err(TemplateError::InvalidPlaceholder { .. })
        ));
        assert!(matches!(
            substitute("konec@", &sample()),
            Err(TemplateError::InvalidPlaceholder { .. })
        ));
    }

    #[test]
    fn render_preserves_order() {
        let first = data! { "n" => 1 };
        let second = data! { "n" => 2 };
        let rendered = render("$@n$", "resitev @n", &[first, second]).unwrap();
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].instruction, "$1$");
        assert_eq!(rendered[1].solution, "resitev 2");
    }
}
