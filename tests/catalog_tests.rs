//! Catalog store behaviour over the shipped pet list.

use petshop::catalog::{Category, PetCatalog, PetFilter, PetRecord, Sex};

fn names(pets: &[&PetRecord]) -> Vec<String> {
    pets.iter()
        .map(|p| p.name.clone().unwrap_or_default())
        .collect()
}

/// Index of each record in the full catalog, by identity.
fn positions(catalog: &PetCatalog, pets: &[&PetRecord]) -> Vec<usize> {
    let all = catalog.all();
    pets.iter()
        .map(|p| {
            all.iter()
                .position(|q| std::ptr::eq(*p, *q))
                .expect("record not in catalog")
        })
        .collect()
}

#[test]
fn test_catalog_size_and_grouping() {
    let catalog = PetCatalog::shared();
    assert_eq!(catalog.len(), 34);
    assert_eq!(catalog.by_category(Category::Dog).len(), 14);
    assert_eq!(catalog.by_category(Category::Cat).len(), 10);
    assert_eq!(catalog.by_category(Category::Fish).len(), 10);

    let categories: Vec<Category> = catalog.all().iter().map(|p| p.category).collect();
    let mut sorted = categories.clone();
    sorted.sort_by_key(|c| Category::ALL.iter().position(|x| x == c));
    assert_eq!(categories, sorted, "dogs, then cats, then fish");
}

#[test]
fn test_empty_filter_is_identity() {
    let catalog = PetCatalog::shared();
    assert_eq!(catalog.filtered(&PetFilter::default()), catalog.all());
    assert_eq!(catalog.by_breed(""), catalog.all());
}

#[test]
fn test_dogs_start_with_thor_and_luna() {
    let catalog = PetCatalog::shared();
    let dogs = catalog.filtered(&PetFilter::default().category(Category::Dog));
    assert_eq!(dogs.len(), 14);
    assert_eq!(dogs[0].breed, "Pastor-alemão");
    assert_eq!(names(&dogs[..2]), vec!["Thor", "Luna"]);
    assert!(dogs.iter().all(|p| p.category == Category::Dog));
}

#[test]
fn test_golden_female_is_honey() {
    let catalog = PetCatalog::shared();
    let pets = catalog.by_breed_and_sex("golden", Sex::Female);
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].breed, "Golden Retriever");
    assert_eq!(pets[0].name.as_deref(), Some("Honey"));
}

#[test]
fn test_unknown_breed_is_empty() {
    let catalog = PetCatalog::shared();
    assert!(catalog.by_breed("xyz-not-a-breed").is_empty());
    assert!(catalog
        .by_breed_and_sex("xyz-not-a-breed", Sex::Male)
        .is_empty());
}

#[test]
fn test_breed_match_ignores_case() {
    let catalog = PetCatalog::shared();
    assert_eq!(catalog.by_breed("POODLE"), catalog.by_breed("poodle"));
    assert_eq!(catalog.by_breed("PoOdLe").len(), 2);
}

#[test]
fn test_color_substring_match() {
    let catalog = PetCatalog::shared();
    let pets = catalog.filtered(&PetFilter::default().color("branco"));
    let colors: Vec<&str> = pets.iter().map(|p| p.color.as_str()).collect();
    assert!(colors.contains(&"Branco e Amarelo"));
    assert!(colors.contains(&"Branco, Preto e Amarelo"));
    assert!(pets
        .iter()
        .all(|p| p.color.to_lowercase().contains("branco")));

    let expected: Vec<_> = catalog
        .all()
        .into_iter()
        .filter(|p| p.color.to_lowercase().contains("branco"))
        .collect();
    assert_eq!(pets, expected);
    assert_eq!(pets.len(), 16);
}

#[test]
fn test_filter_is_conjunctive() {
    let catalog = PetCatalog::shared();
    let filter = PetFilter::default()
        .category(Category::Cat)
        .sex(Sex::Male)
        .color("PRETO");
    let pets = catalog.filtered(&filter);
    assert_eq!(names(&pets), vec!["Felix", "Tiger", "Tom"]);
    assert!(pets.iter().all(|p| p.category == Category::Cat
        && p.sex == Sex::Male
        && p.color.to_lowercase().contains("preto")));
}

#[test]
fn test_filtering_is_idempotent() {
    let catalog = PetCatalog::shared();
    let filter = PetFilter::default().category(Category::Dog).sex(Sex::Female);
    let once = catalog.filtered(&filter);
    let again = PetCatalog::from_records(once.iter().map(|p| (*p).clone()).collect());
    let twice = again.filtered(&filter);
    assert_eq!(once.len(), twice.len());
    assert!(once.iter().zip(&twice).all(|(a, b)| a == b));
}

#[test]
fn test_results_keep_catalog_order() {
    let catalog = PetCatalog::shared();
    for result in [
        catalog.by_breed("r"),
        catalog.by_breed_and_sex("e", Sex::Male),
        catalog.filtered(&PetFilter::default().color("amarelo")),
        catalog.by_category(Category::Fish),
    ] {
        let idx = positions(catalog, &result);
        assert!(idx.windows(2).all(|w| w[0] < w[1]), "out of order: {idx:?}");
    }
}

#[test]
fn test_shared_catalog_is_one_instance() {
    assert!(std::ptr::eq(PetCatalog::shared(), PetCatalog::shared()));
}
