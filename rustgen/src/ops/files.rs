//! Files operation - where everything would be written.

use rustgen_codegen::Generator;

use crate::reports::FilesReport;

pub fn files(generator: &Generator) -> FilesReport {
    let paths = generator.paths();

    FilesReport {
        output_folder: generator.output_folder().to_path_buf(),
        folders: vec![
            ("apis", paths.api_file_folder()),
            ("models", paths.model_file_folder()),
            ("api docs", paths.api_doc_file_folder()),
            ("model docs", paths.model_doc_file_folder()),
        ],
        supporting_files: generator
            .supporting_files()
            .resolve_under(generator.output_folder()),
        templates: generator
            .template_files()
            .iter()
            .map(|t| (t.template, t.extension))
            .collect(),
    }
}
