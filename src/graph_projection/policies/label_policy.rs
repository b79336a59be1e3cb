/// LabelPolicy for deriving the label a node is drawn with
///
/// Priority order:
/// 1. `"{name} - {model}"` when a model is known
/// 2. `"{name} ({compatible})"` when a compatible string is known
/// 3. the bare node name
///
/// Empty strings count as unknown.
pub struct LabelPolicy;

impl LabelPolicy {
    pub fn display_name(name: &str, model: Option<&str>, compatible: Option<&str>) -> String {
        let model = model.filter(|m| !m.is_empty());
        let compatible = compatible.filter(|c| !c.is_empty());

        match (model, compatible) {
            (Some(model), _) => format!("{} - {}", name, model),
            (None, Some(compatible)) => format!("{} ({})", name, compatible),
            (None, None) => name.to_string(),
        }
    }
}
