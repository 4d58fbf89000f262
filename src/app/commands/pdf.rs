use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::tools::{
    DEFAULT_PDF_DPI, GHOSTSCRIPT, default_compressed_path, pdf_compress_args,
};
use crate::ports::ToolRunner;

/// Rewrite a PDF through ghostscript at screen quality. Returns the written path.
pub fn compress(
    runner: &impl ToolRunner,
    input: &Path,
    output: Option<&Path>,
    dpi: Option<u32>,
) -> Result<PathBuf, AppError> {
    if !input.is_file() {
        return Err(AppError::not_found("Input PDF", input));
    }
    let dpi = dpi.unwrap_or(DEFAULT_PDF_DPI);
    if dpi == 0 {
        return Err(AppError::Validation("DPI must be positive".to_string()));
    }
    runner.require(GHOSTSCRIPT)?;

    let output = output.map(Path::to_path_buf).unwrap_or_else(|| default_compressed_path(input));
    runner.run_checked(GHOSTSCRIPT, &pdf_compress_args(input, &output, dpi))?;
    tracing::info!(input = %input.display(), output = %output.display(), dpi, "compressed pdf");
    Ok(output)
}
