//! Rendered HTML for the banner, search and 404 pages.

use petshop::catalog::PetCatalog;
use petshop::query::{resolve, SearchParams};
use petshop::views::{render_not_found, render_page, render_search, Page};

fn search(q: &str, sex: &str) -> String {
    let params = SearchParams {
        text: Some(q.to_string()),
        sex: Some(sex.to_string()),
        ..SearchParams::default()
    };
    render_search(&resolve(PetCatalog::shared(), &params)).unwrap()
}

#[test]
fn test_dogs_page_lists_only_dogs() {
    let html = render_page(Page::Dogs, PetCatalog::shared()).unwrap();
    assert!(html.contains("<h1>Cachorros</h1>"));
    assert!(html.contains("images/banner_dog.jpg"));
    assert!(html.contains("Pastor-alemão"));
    assert!(html.contains("Thor"));
    assert!(!html.contains("Garfield"));
    assert!(html.contains(r#"<li class="active"><a href="/dogs">"#));
    assert_eq!(html.matches(r#"class="active""#).count(), 1);
}

#[test]
fn test_home_page_lists_every_category() {
    let html = render_page(Page::Home, PetCatalog::shared()).unwrap();
    assert!(html.contains("Todos os animais"));
    for name in ["Thor", "Garfield", "Nemo"] {
        assert!(html.contains(name), "missing {name}");
    }
    assert_eq!(html.matches(r#"<li class="pet">"#).count(), 34);
}

#[test]
fn test_each_page_has_its_banner() {
    for (page, title) in [
        (Page::Home, "Todos os animais"),
        (Page::Dogs, "Cachorros"),
        (Page::Cats, "Gatos"),
        (Page::Fishes, "Peixes"),
    ] {
        let html = render_page(page, PetCatalog::shared()).unwrap();
        assert!(html.contains(&format!("<h1>{title}</h1>")), "{page}");
    }
}

#[test]
fn test_search_page_keeps_form_state() {
    let html = search("poodle", "Masculino");
    assert!(html.contains(r#"name="q" placeholder="Buscar raça" value="poodle""#));
    assert!(html.contains(r#"value="Masculino" checked"#));
    assert!(!html.contains(r#"value="Feminino" checked"#));
    assert!(html.contains("Toby"));
    assert!(!html.contains("Nina"));
    assert!(!html.contains(r#"class="banner""#));
    assert!(html.contains(r#"<li class="active"><a href="/">"#));
}

#[test]
fn test_empty_search_shows_notice() {
    let html = search("xyz-not-a-breed", "");
    assert!(html.contains("Nenhum animal encontrado."));
    assert!(!html.contains(r#"<li class="pet">"#));
}

#[test]
fn test_search_text_is_escaped() {
    let html = search("<script>", "");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn test_not_found_page() {
    let html = render_not_found().unwrap();
    assert!(html.contains("<h1>404</h1>"));
    assert!(html.contains("Página não encontrada."));
    assert!(!html.contains(r#"class="active""#));
}
