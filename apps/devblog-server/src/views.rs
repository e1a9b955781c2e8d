//! HTML rendering for the browser-facing pages.

use devblog_core::domain::Post;

const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Values of the create form, echoed back when validation fails.
#[derive(Debug, Default)]
pub struct FormValues<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub author: &'a str,
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>{title} - DevBlog</title>
</head>
<body>
<header>
<h1><a href="/">DevBlog</a></h1>
<nav><a href="/">Inicio</a> | <a href="/create">Crear Post</a> | <a href="/search">Buscar</a></nav>
</header>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

fn post_card(post: &Post) -> String {
    format!(
        r#"<article class="post-card">
<h3><a href="/post/{id}">{title}</a></h3>
<p class="meta">{author} &middot; {date}</p>
<p>{summary}</p>
<a href="/post/{id}">Leer más</a>
</article>
"#,
        id = post.id,
        title = escape(&post.title),
        author = escape(&post.author),
        date = post.created_at.format(DATE_FORMAT),
        summary = escape(&post.summary()),
    )
}

/// Home page listing the most recent posts.
pub fn index_page(posts: &[Post]) -> String {
    let mut body = String::from("<h2>Posts Recientes</h2>\n");
    if posts.is_empty() {
        body.push_str(r#"<p>Todavía no hay posts. <a href="/create">Escribe el primero</a>.</p>"#);
    }
    for post in posts {
        body.push_str(&post_card(post));
    }
    layout("Inicio", &body)
}

/// Full view of a single post.
pub fn post_page(post: &Post) -> String {
    let mut body = format!(
        "<article>\n<h2>{title}</h2>\n<p class=\"meta\">Por {author} &middot; {date}</p>\n",
        title = escape(&post.title),
        author = escape(&post.author),
        date = post.created_at.format(DATE_FORMAT),
    );
    for paragraph in post.paragraphs() {
        body.push_str(&format!("<p>{}</p>\n", escape(paragraph)));
    }
    body.push_str("</article>\n<a href=\"/\">Volver al inicio</a>\n");
    layout(&post.title, &body)
}

/// The create form, with validation messages when a submission was rejected.
pub fn create_page(values: &FormValues<'_>, errors: &[String]) -> String {
    let mut body = String::from("<h2>Crear Nuevo Post</h2>\n");
    if !errors.is_empty() {
        body.push_str("<ul class=\"errors\">\n");
        for error in errors {
            body.push_str(&format!("<li>{}</li>\n", escape(error)));
        }
        body.push_str("</ul>\n");
    }
    body.push_str(&format!(
        r#"<form method="post" action="/create">
<label for="title">Título</label>
<input type="text" id="title" name="title" value="{title}">
<label for="author">Autor</label>
<input type="text" id="author" name="author" value="{author}">
<label for="content">Contenido</label>
<textarea id="content" name="content" rows="12">{content}</textarea>
<button type="submit">Publicar</button>
</form>
"#,
        title = escape(values.title),
        author = escape(values.author),
        content = escape(values.content),
    ));
    layout("Crear Nuevo Post", &body)
}

/// Search form plus results. `results` is `None` when no query was submitted.
pub fn search_page(query: &str, results: Option<&[Post]>) -> String {
    let mut body = format!(
        r#"<h2>Búsqueda de Posts</h2>
<form method="get" action="/search">
<input type="search" name="q" value="{query}" placeholder="Buscar...">
<button type="submit">Buscar</button>
</form>
"#,
        query = escape(query),
    );

    match results {
        None => body.push_str("<p>Introduce un término para buscar en los posts.</p>\n"),
        Some([]) => {
            body.push_str(&format!(
                "<p>No se encontraron resultados para \"{}\".</p>\n",
                escape(query)
            ));
        }
        Some(posts) => {
            body.push_str(&format!(
                "<p>{} resultado(s) para \"{}\"</p>\n",
                posts.len(),
                escape(query)
            ));
            for post in posts {
                body.push_str(&post_card(post));
            }
        }
    }
    layout("Búsqueda de Posts", &body)
}

pub fn not_found_page() -> String {
    layout(
        "Página no encontrada",
        "<h2>Página no encontrada</h2>\n<p>El post que buscas no existe.</p>\n<a href=\"/\">Volver al inicio</a>\n",
    )
}
