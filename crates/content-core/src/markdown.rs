// content-core/src/markdown.rs
//! Markdown 渲染与正文链接改写

use pulldown_cmark::{Options, Parser, html};

/// 将 markdown 渲染为 HTML
pub fn render(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

/// 为正文中的绝对路径链接加上部署基础路径
///
/// 部署在子路径（如 `/repo/`）时 `/article/xxx` 需要变成 `/repo/article/xxx`。
/// 基础路径为空（或只有 `/`）时原样返回。
pub fn rewrite_base(html: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return html.to_string();
    }
    html.replace("href=\"/", &format!("href=\"{}/", base))
}
