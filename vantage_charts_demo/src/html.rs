// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal HTML report assembly for `vantage_charts_demo`.

#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    out.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 24px; }\n\
         section { margin-bottom: 32px; }\n\
         h2 { margin-bottom: 4px; }\n\
         p { color: #444; margin-top: 0; }\n\
         svg { border: 1px solid #ddd; }\n\
         </style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));

    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", escape_html(section.title)));
        out.push_str(&format!("<p>{}</p>\n", escape_html(section.description)));
        out.push_str(&section.svg);
        out.push_str("</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
