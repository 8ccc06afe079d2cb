//! Fixed page template for the printer report

/// Template engine for the page shell around the report sections
pub struct TemplateEngine;

const PAGE_HEADER: &str = r#"<!DOCTYPE html>
<html><head><meta charset="utf-8" /><title>{{title}}</title><style>
body{
	width: 700px;
	color: #111111;
}
.entry{
	width: 100%;
	float: left;
	padding: 3px;
	margin: 3px;
	background-color: #EEEEFF;
}
.title{
	width: 90%;
	float: left;
	font-weight: bold;
}
.container{
	float: left;
	margin-top: 5px;
}
.header{
	float: left;
	margin-top: 5px;
	width: 100%;
}
.printer{
	float: left;
	padding: 3px;
	margin: 4px;
	background-color: #DDDDEE;
}
.grouplistitem{
	float: left;
	margin: 2px;
	padding: 3px;
	background-color: #DDDDFF;
}
.top{
	float: right;
}
a, a.link{
	color: #002244;
}
h3, hr{clear: both;}
.clear{clear: both;}
</style></head><body>
"#;

const PAGE_FOOTER: &str = "</body></html>\n";

impl TemplateEngine {
    /// Document head with the embedded stylesheet. `title` must already be escaped.
    pub fn render_header(title: &str) -> String {
        PAGE_HEADER.replace("{{title}}", title)
    }

    pub fn footer() -> &'static str {
        PAGE_FOOTER
    }
}
