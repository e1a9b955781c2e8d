//! Sample posts loaded into a freshly started blog.

use devblog_core::domain::NewPost;

use super::InMemoryPostStore;

const SAMPLE_AUTHOR: &str = "DevOps Student";

/// The two posts every fresh store starts with, in id order.
pub fn sample_posts() -> Vec<NewPost> {
    vec![
        NewPost::new(
            "Bienvenido a DevBlog",
            "Este es el primer post de DevBlog, un blog sencillo para documentar \
             lo que voy aprendiendo sobre desarrollo y operaciones.\n\n\
             Aquí encontrarás notas sobre integración continua, pruebas automatizadas \
             y despliegues. ¡Gracias por pasarte!",
        )
        .with_author(SAMPLE_AUTHOR),
        NewPost::new(
            "Mi experiencia con Docker",
            "Docker cambió la forma en que preparo mis entornos de desarrollo. \
             Empaquetar la aplicación con sus dependencias evita el clásico \
             \"en mi máquina funciona\".\n\n\
             En este post repaso cómo escribir un Dockerfile mínimo, cómo usar \
             volúmenes y por qué conviene mantener las imágenes pequeñas.",
        )
        .with_author(SAMPLE_AUTHOR),
    ]
}

/// A fresh store holding exactly the sample posts, with ids 1 and 2.
pub fn new_store_with_samples() -> InMemoryPostStore {
    InMemoryPostStore::seeded(sample_posts()).expect("Sample posts are valid")
}
