//! Declarative form model shared between the form modal and the sections
//! that declare their edit dialogs.

use std::collections::BTreeMap;

/// Which reference collection a lookup field draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    User,
    Area,
    Employment,
    Pathology,
    Product,
}

/// Closed set of field kinds. The renderer matches on this exhaustively,
/// so adding a kind is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Number,
    Phone,
    /// Single choice from a fixed option list.
    Select(&'static [&'static str]),
    /// Pick an existing record from a reference collection.
    Reference(ReferenceKind),
    /// Pick an existing record, or create a new one by typing its name.
    CreatableReference(ReferenceKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
        }
    }

    pub fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }
}

/// A drafted value. Reference lookups carry the resolved identifier next to
/// the display text; nothing is ever inferred from the shape of the text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValue {
    pub text: String,
    pub ref_id: Option<String>,
}

impl FieldValue {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ref_id: None,
        }
    }

    pub fn reference(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ref_id: Some(id.into()),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.ref_id.is_none()
    }
}

/// Field name -> drafted value.
pub type FormDraft = BTreeMap<String, FieldValue>;

pub fn text_of(draft: &FormDraft, name: &str) -> String {
    draft.get(name).map(|v| v.text.trim().to_string()).unwrap_or_default()
}

pub fn ref_id_of(draft: &FormDraft, name: &str) -> Option<String> {
    draft.get(name).and_then(|v| v.ref_id.clone())
}

/// Labels of every required field the draft leaves blank, in declaration
/// order. Validation never stops at the first miss.
pub fn missing_required_labels(fields: &[FieldSpec], draft: &FormDraft) -> Vec<String> {
    fields
        .iter()
        .filter(|f| f.required)
        .filter(|f| draft.get(f.name).map_or(true, FieldValue::is_blank))
        .map(|f| f.label.to_string())
        .collect()
}

pub fn missing_fields_message(labels: &[String]) -> String {
    format!(
        "Por favor complete los campos requeridos: {}",
        labels.join(", ")
    )
}

/// Option offered by a reference lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct RefOption {
    pub id: String,
    pub name: String,
}

/// Exact-name lookup among loaded reference options.
pub fn resolve_by_name<'a>(options: &'a [RefOption], name: &str) -> Option<&'a RefOption> {
    options.iter().find(|o| o.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::required("name", "Nombre Completo", FieldKind::Text),
            FieldSpec::required("dni", "Cédula", FieldKind::Text),
            FieldSpec::optional("contact", "Contacto", FieldKind::Phone),
        ]
    }

    #[test]
    fn all_missing_required_labels_are_collected() {
        let draft = FormDraft::new();
        let missing = missing_required_labels(&specs(), &draft);
        assert_eq!(missing, vec!["Nombre Completo", "Cédula"]);

        let msg = missing_fields_message(&missing);
        assert!(msg.contains("Nombre Completo"));
        assert!(msg.contains("Cédula"));
    }

    #[test]
    fn whitespace_only_text_counts_as_blank() {
        let mut draft = FormDraft::new();
        draft.insert("name".into(), FieldValue::text("   "));
        draft.insert("dni".into(), FieldValue::text("123"));
        assert_eq!(
            missing_required_labels(&specs(), &draft),
            vec!["Nombre Completo"]
        );
    }

    #[test]
    fn reference_value_with_only_an_id_is_not_blank() {
        let v = FieldValue::reference("0a1b", "");
        assert!(!v.is_blank());
    }

    #[test]
    fn complete_draft_passes() {
        let mut draft = FormDraft::new();
        draft.insert("name".into(), FieldValue::text("Ana"));
        draft.insert("dni".into(), FieldValue::text("123"));
        assert!(missing_required_labels(&specs(), &draft).is_empty());
    }

    #[test]
    fn resolve_by_name_is_exact() {
        let options = vec![
            RefOption {
                id: "1".into(),
                name: "Cocina".into(),
            },
            RefOption {
                id: "2".into(),
                name: "Almacén".into(),
            },
        ];
        assert_eq!(resolve_by_name(&options, "Almacén").map(|o| o.id.as_str()), Some("2"));
        assert!(resolve_by_name(&options, "almacén").is_none());
    }
}
