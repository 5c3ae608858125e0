//! Files command report.

use std::path::PathBuf;

use rustgen_codegen::ResolvedFile;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct FilesReport {
    pub output_folder: PathBuf,
    /// Category label and folder.
    pub folders: Vec<(&'static str, PathBuf)>,
    pub supporting_files: Vec<ResolvedFile>,
    /// Per-artifact template and the extension of what it renders.
    pub templates: Vec<(&'static str, &'static str)>,
}

impl Report for FilesReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("Output: {}", self.output_folder.display()));
        out.newline();

        out.section("Folders");
        for (label, folder) in &self.folders {
            out.key_value_indented(label, &folder.display().to_string());
        }
        out.newline();

        out.section("Supporting files");
        for file in &self.supporting_files {
            out.list_item(&format!("{} ({})", file.path.display(), file.template));
        }
        out.newline();

        out.section("Templates");
        for (template, extension) in &self.templates {
            out.key_value_indented(template, &format!("*{}", extension));
        }
    }
}
