/// One `name`/`value` field of a job, kept in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Display form shared by tooltips and the detail panel.
    pub fn display_line(&self) -> String {
        format!("{}: {}", self.name, self.value)
    }
}

/// A single unit of work read from a `<job>` element.
///
/// `attributes[0]` is always the identifier attribute. The list is never
/// reordered once the job is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    id: String,
    attributes: Vec<Attribute>,
}

impl Job {
    pub(crate) fn new(id_attribute: Attribute) -> Self {
        Self {
            id: id_attribute.value.clone(),
            attributes: vec![id_attribute],
        }
    }

    pub(crate) fn push_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, index: usize) -> Option<&Attribute> {
        self.attributes.get(index)
    }
}

/// One observed value for a (data source, variation) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub value: f64,
    /// Back-reference into the job registry.
    pub job_id: String,
}
