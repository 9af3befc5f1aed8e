use std::collections::HashSet;

use crate::{
    config::DocumentationMode,
    error::{Error, Result},
    projection::project_member,
    render::{TypeRenderer, constraints_are_nullable, is_nullable},
    types::{AccessLevel, GenericParameterFact, InterfaceModel, MemberFact},
};

/// Assembles the model of one interface from already-filtered facts
pub struct InterfaceModelBuilder {
    namespace: String,
    name: String,
    access: AccessLevel,
    source_class: String,
    documentation: Vec<String>,
    generics: Vec<GenericParameterFact>,
    members: Vec<MemberFact>,
    documentation_mode: DocumentationMode,
}

impl InterfaceModelBuilder {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>, access: AccessLevel) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            access,
            source_class: String::new(),
            documentation: Vec::new(),
            generics: Vec::new(),
            members: Vec::new(),
            documentation_mode: DocumentationMode::default(),
        }
    }

    pub fn source_class(mut self, metadata_name: impl Into<String>) -> Self {
        self.source_class = metadata_name.into();
        self
    }

    /// Class-level doc comment, copied onto the interface line by line
    pub fn documentation(mut self, text: &str) -> Self {
        self.documentation = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        self
    }

    pub fn generics(mut self, generics: Vec<GenericParameterFact>) -> Self {
        self.generics = generics;
        self
    }

    pub fn members(mut self, members: Vec<MemberFact>) -> Self {
        self.members = members;
        self
    }

    pub fn documentation_mode(mut self, mode: DocumentationMode) -> Self {
        self.documentation_mode = mode;
        self
    }

    /// Order members as properties, methods, events (each kind keeping its
    /// incoming order) and fold the nullable context over every type touched.
    pub fn build(mut self, renderer: &mut TypeRenderer<'_>) -> Result<InterfaceModel> {
        self.check_consistency()?;
        self.members.sort_by_key(|fact| fact.kind);

        let nullable_context = self
            .members
            .iter()
            .flat_map(|fact| fact.type_refs())
            .any(is_nullable)
            || self
                .members
                .iter()
                .flat_map(|fact| fact.type_parameters())
                .chain(self.generics.iter())
                .any(constraints_are_nullable);

        let type_parameters = self
            .generics
            .iter()
            .map(|parameter| renderer.render_type_parameter(parameter))
            .collect();
        let members = self
            .members
            .iter()
            .map(|fact| project_member(fact, renderer, self.documentation_mode))
            .collect();

        Ok(InterfaceModel {
            namespace: self.namespace,
            name: self.name,
            access: self.access,
            source_class: self.source_class,
            documentation: self.documentation,
            type_parameters,
            members,
            nullable_context,
        })
    }

    fn check_consistency(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InconsistentFacts(format!(
                "empty interface name for {}",
                self.source_class
            )));
        }

        let mut seen = HashSet::new();
        for fact in &self.members {
            if fact.kind != fact.signature.kind() {
                return Err(Error::InconsistentFacts(format!(
                    "{} is recorded as a {:?} but carries a {:?} signature",
                    fact.name,
                    fact.kind,
                    fact.signature.kind()
                )));
            }
            if !seen.insert((fact.kind, fact.signature_key.as_str())) {
                return Err(Error::InconsistentFacts(format!(
                    "{:?} {} appears twice on {}",
                    fact.kind, fact.signature_key, self.name
                )));
            }
        }
        Ok(())
    }
}
