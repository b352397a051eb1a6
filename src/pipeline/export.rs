//! Static export: the whole page at rest, written once.

use std::io::Write;

use tracing::info;

use crate::app::Portfolio;
use crate::error::Result;
use crate::renderer::InlineRenderer;

/// Write every row of the page to `out`.
pub fn export_to<W: Write>(portfolio: &Portfolio, out: &mut W) -> Result<()> {
    let buffer = portfolio.render_export();
    InlineRenderer::new().render_to(&buffer, out)?;
    out.flush()?;
    info!(rows = buffer.height(), width = buffer.width(), "page exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin_profile;
    use crate::links::RecordingOpener;
    use crate::state::Media;
    use std::time::Instant;

    #[test]
    fn test_export_writes_one_line_per_row() {
        let media = Media::new(90, 24, 80, true);
        let page = Portfolio::new(
            builtin_profile(),
            media,
            Box::new(RecordingOpener::new()),
            2026,
            Instant::now(),
        )
        .unwrap();

        let mut sink = Vec::new();
        export_to(&page, &mut sink).unwrap();
        let text = String::from_utf8(sink).unwrap();

        assert_eq!(text.matches('\n').count(), page.layout().height as usize);
        assert!(text.contains("Let’s Connect"));
    }
}
