use crate::ast;
use crate::loc::SourcePosition;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValueDefinition {
    pub(crate) def_location: SourcePosition,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<ast::Directive>,
    pub(crate) name: String,
}
impl EnumValueDefinition {
    pub fn def_location(&self) -> &SourcePosition {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[ast::Directive] {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
