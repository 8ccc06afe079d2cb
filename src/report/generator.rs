//! HTML report rendering
//!
//! The page has four parts: a group index, a printer index, one detail
//! section per group and one per printer. Every anchor id and every href
//! comes from [`sanitize_anchor`], applied to the table key, so a link
//! always resolves to the section it names.

use quick_xml::escape::escape;

use crate::types::{GroupTable, RelationTable};
use crate::utils::{printer_key, sanitize_anchor};
use super::templates::TemplateEngine;
use super::ReportConfig;

/// Accumulates the page one block at a time.
#[derive(Debug)]
pub struct ReportBuilder {
    html: String,
}

impl ReportBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            html: TemplateEngine::render_header(&escape(title)),
        }
    }

    /// Heading that opens an index. The first one sits flush at the top of the page.
    pub fn index_heading(&mut self, heading: &str, first: bool) -> &mut Self {
        if first {
            self.html.push_str(&format!("<h2>{}</h2><hr />\n", escape(heading)));
        } else {
            self.html.push_str(&format!(
                "<div class=\"header\"><h2>{}</h2><hr /></div>\n",
                escape(heading)
            ));
        }
        self
    }

    pub fn index_entry(&mut self, label: &str, anchor: &str) -> &mut Self {
        self.html.push_str(&format!(
            "<div class=\"grouplistitem\"><a href=\"#{}\">{}</a></div>\n",
            anchor,
            escape(label)
        ));
        self
    }

    pub fn detail_heading(&mut self, heading: &str) -> &mut Self {
        self.html.push_str(&format!(
            "<div class=\"entry\"><h2>{}</h2><hr /></div>\n",
            escape(heading)
        ));
        self
    }

    /// One entry with its own anchor and a link per `(label, anchor)` pair.
    pub fn detail_section<'a, I>(&mut self, label: &str, anchor: &str, links: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        self.html.push_str(&format!(
            "<div class=\"entry\"><div class=\"title\"><a id=\"{}\">{}</a></div>\
             <div class=\"top\"><a href=\"#\">Top</a></div><div class=\"container\">",
            anchor,
            escape(label)
        ));
        for (link_label, link_anchor) in links {
            self.html.push_str(&format!(
                "<a href=\"#{}\"><span class=\"printer\">{}</span></a>",
                link_anchor,
                escape(link_label)
            ));
        }
        self.html.push_str("</div><div class=\"clear\"></div></div>\n");
        self
    }

    pub fn finish(mut self) -> String {
        self.html.push_str(TemplateEngine::footer());
        self.html
    }
}

/// Renders the relationship tables into one self-contained document.
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Both tables iterate in ascending key order, which is the order of
    /// every index and detail listing.
    pub fn render(&self, printers: &RelationTable, groups: &GroupTable) -> String {
        let mut page = ReportBuilder::new(&self.config.title);

        page.index_heading("Groups", true);
        for group in groups.keys() {
            page.index_entry(group, &sanitize_anchor(group));
        }

        page.index_heading("Printers", false);
        for printer in printers.keys() {
            page.index_entry(printer, &sanitize_anchor(printer));
        }

        page.detail_heading("Groups");
        for (group, members) in groups {
            // Members are raw display names; link to the printer's key.
            let links = members
                .iter()
                .map(|name| (name.as_str(), sanitize_anchor(&printer_key(name))));
            page.detail_section(group, &sanitize_anchor(group), links);
        }

        page.detail_heading("Printers");
        for (printer, targets) in printers {
            let links = targets
                .iter()
                .map(|group| (group.as_str(), sanitize_anchor(group)));
            page.detail_section(printer, &sanitize_anchor(printer), links);
        }

        page.finish()
    }
}
