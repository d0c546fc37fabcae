//! A set of named source documents analysed together.
use crate::config::{Config, is_generated};
use crate::error::BindpathError;
use bindpath_analyzer::{Analyzer, DeclarationIndex, Diagnostic, SourceFile};
use bindpath_syntax::parse_source;
use bindpath_traits::Executor;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    text: String,
}

impl Document {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_generated(&self) -> bool {
        is_generated(&self.text)
    }
}

/// Documents in insertion order. Declarations in any document are visible
/// to call sites in every other.
#[derive(Debug, Clone, Default)]
pub struct Project {
    documents: Vec<Document>,
}

impl Project {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_document(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<&mut Self, BindpathError> {
        let document = Document::new(name, text);
        if self.document(document.name()).is_some() {
            return Err(BindpathError::Project(format!(
                "document '{}' already exists",
                document.name()
            )));
        }
        self.documents.push(document);
        Ok(self)
    }

    pub fn replace_document(
        &mut self,
        name: &str,
        text: impl Into<String>,
    ) -> Result<&mut Self, BindpathError> {
        let document = self.document_mut(name)?;
        document.text = text.into();
        Ok(self)
    }

    /// Replaces the first occurrence of `old_part` in the named document.
    pub fn replace_part_of_document(
        &mut self,
        name: &str,
        old_part: &str,
        new_part: &str,
    ) -> Result<&mut Self, BindpathError> {
        let document = self.document_mut(name)?;
        if !document.text.contains(old_part) {
            return Err(BindpathError::Project(format!(
                "'{}' does not occur in document '{}'",
                old_part, name
            )));
        }
        document.text = document.text.replacen(old_part, new_part, 1);
        Ok(self)
    }

    pub fn document(&self, name: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.name == name)
    }

    fn document_mut(&mut self, name: &str) -> Result<&mut Document, BindpathError> {
        self.documents
            .iter_mut()
            .find(|d| d.name == name)
            .ok_or_else(|| BindpathError::Project(format!("no document named '{}'", name)))
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Parses every document, indexes their declarations and checks every
    /// call site. A document that does not parse is logged and left out; the
    /// others are still checked.
    pub fn analyze(&self, config: &Config) -> Result<Vec<Diagnostic>, BindpathError> {
        let executor = config.executor();

        let jobs: Vec<(String, String)> = self
            .documents
            .iter()
            .map(|d| (d.name.clone(), d.text.clone()))
            .collect();
        let parsed = executor.execute_all_fallible(jobs, |(name, text)| match parse_source(&text) {
            Ok(unit) => Ok(Arc::new(SourceFile::new(name, text, unit))),
            Err(source) => Err(BindpathError::Document { name, source }),
        });
        let mut files = Vec::with_capacity(parsed.len());
        for result in parsed {
            match result {
                Ok(file) => files.push(file),
                Err(err) => log::error!("{}; skipping it", err),
            }
        }

        let mut index = DeclarationIndex::new(config.marker.as_str());
        for file in &files {
            index.add_unit(&file.unit);
        }

        let checked: Vec<Arc<SourceFile>> = files
            .into_iter()
            .filter(|file| {
                let skip = !config.analyze_generated && is_generated(&file.text);
                if skip {
                    log::warn!("skipping generated file '{}'", file.name);
                }
                !skip
            })
            .collect();

        log::info!(
            "checking {} of {} document(s), {} declaration(s)",
            checked.len(),
            self.documents.len(),
            index.len()
        );
        Ok(Analyzer::new(index, executor).analyze(&checked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECLS: &str = "fn ListView([BindingExpression] binding);";

    #[test]
    fn test_document_management() {
        let mut project = Project::new();
        project
            .add_document("Decls.cs", DECLS)
            .unwrap()
            .add_document("Program.cs", "ListView(() => vm.Items);")
            .unwrap();
        assert!(project.add_document("Decls.cs", "").is_err());

        project
            .replace_part_of_document("Program.cs", "vm.Items", "true")
            .unwrap();
        assert_eq!(
            project.document("Program.cs").unwrap().text(),
            "ListView(() => true);"
        );
        assert!(project.replace_part_of_document("Program.cs", "absent", "x").is_err());
        assert!(project.replace_document("Missing.cs", "").is_err());
        assert_eq!(project.documents().count(), 2);
    }

    #[test]
    fn test_declarations_span_documents() {
        let mut project = Project::new();
        project.add_document("Decls.cs", DECLS).unwrap();
        project
            .add_document("Program.cs", "ListView(() => true);")
            .unwrap();
        let found = project.analyze(&Config::default()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].file, "Program.cs");
    }

    #[test]
    fn test_generated_documents_can_be_skipped() {
        let mut project = Project::new();
        project
            .add_document(
                "View.g.cs",
                format!("// <auto-generated>\n{}\nListView(() => true);", DECLS),
            )
            .unwrap();

        let reported = project.analyze(&Config::default()).unwrap();
        assert_eq!(reported.len(), 1);

        let config = Config::default().with_analyze_generated(false);
        assert!(project.analyze(&config).unwrap().is_empty());
    }

    #[test]
    fn test_unparsable_document_does_not_stop_the_others() {
        let mut project = Project::new();
        project
            .add_document("Decls.cs", DECLS)
            .unwrap()
            .add_document("Broken.cs", "ListView(() => ;")
            .unwrap()
            .add_document("Good.cs", "ListView(() => true);")
            .unwrap();
        let found = project.analyze(&Config::default()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].file, "Good.cs");
    }
}
