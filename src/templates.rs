//! The HTML dashboard served on `/`.

use std::path::Path;

use tera::{Context, Tera};

const INDEX: &str = "index.html";

/// The index template, parsed once at startup and rendered without parameters.
pub struct IndexPage {
    tera: Tera,
}

impl IndexPage {
    /// Parses the template at `path`. A missing or unparsable file is an error.
    pub fn load(path: &Path) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_template_file(path, Some(INDEX))?;
        Ok(IndexPage { tera })
    }

    #[cfg(test)]
    fn from_source(source: &str) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX, source)?;
        Ok(IndexPage { tera })
    }

    pub fn render(&self) -> Result<String, tera::Error> {
        self.tera.render(INDEX, &Context::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_template_parses_and_renders() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates/index.html");
        let page = IndexPage::load(&path).expect("bundled template should load");
        let html = page.render().expect("render");

        assert!(html.contains("/api/serial"));
        assert!(html.contains("/api/parallel"));
        assert!(html.contains("/api/compare"));
    }

    #[test]
    fn missing_template_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(IndexPage::load(&tmp.path().join("index.html")).is_err());
    }

    #[test]
    fn render_is_stable_across_calls() {
        let page = IndexPage::from_source("<h1>Benchmarks</h1>").unwrap();
        assert_eq!(page.render().unwrap(), "<h1>Benchmarks</h1>");
        assert_eq!(page.render().unwrap(), "<h1>Benchmarks</h1>");
    }
}
