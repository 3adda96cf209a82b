use super::record::{Category::{self, *}, PetRecord, Sex::{self, *}};

fn pet(
    category: Category,
    image: &str,
    breed: &str,
    color: &str,
    sex: Sex,
    name: &str,
) -> PetRecord {
    PetRecord::new(category, image, breed, color, sex, Some(name))
}

/// Seed data for the shared catalog, grouped by category in display order.
pub(super) fn seed() -> Vec<PetRecord> {
    vec![
        // Dogs
        pet(Dog, "pastor-alemao_macho.jpg", "Pastor-alemão", "Amarelo e Preto", Male, "Thor"),
        pet(Dog, "pastor-alemao_femea.jpg", "Pastor-alemão", "Amarelo e Preto", Female, "Luna"),
        pet(Dog, "labrador_macho.jpg", "Labrador Retriever", "Branco", Male, "Max"),
        pet(Dog, "labrador_femea.jpg", "Labrador Retriever", "Branco", Female, "Bella"),
        pet(Dog, "zwergspitz_macho.jpg", "Zwergspitz", "Amarelo", Male, "Simba"),
        pet(Dog, "zwergspitz_femea.jpg", "Zwergspitz", "Amarelo", Female, "Mel"),
        pet(Dog, "husky_macho.jpg", "Husky Siberiano", "Branco e Preto", Male, "Zeus"),
        pet(Dog, "husky_femea.jpg", "Husky Siberiano", "Branco e Preto", Female, "Maya"),
        pet(Dog, "golden_macho.jpg", "Golden Retriever", "Amarelo", Male, "Duke"),
        pet(Dog, "golden_femea.jpg", "Golden Retriever", "Amarelo", Female, "Honey"),
        pet(Dog, "poodle_macho2.jpg", "Poodle", "Branco", Male, "Toby"),
        pet(Dog, "poodle_femea1.jpg", "Poodle", "Branco", Female, "Nina"),
        pet(Dog, "bulldog_macho.jpg", "Bulldog", "Branco e Amarelo", Male, "Rocky"),
        pet(Dog, "bulldog_femea.jpg", "Bulldog", "Branco e Amarelo", Female, "Lola"),
        // Cats
        pet(Cat, "persa_macho.jpg", "Persa", "Amarelo", Male, "Garfield"),
        pet(Cat, "persa_femea.jpg", "Persa", "Amarelo", Female, "Mia"),
        pet(Cat, "mainecoon_macho.jpg", "Maine Coon", "Preto e Branco", Male, "Felix"),
        pet(Cat, "mainecoon_femea.jpg", "Maine Coon", "Preto e Branco", Female, "Frida"),
        pet(Cat, "bengal_macho.jpg", "Bengal", "Branco, Preto e Amarelo", Male, "Tiger"),
        pet(Cat, "bengal_femea.jpg", "Bengal", "Branco, Preto e Amarelo", Female, "Nala"),
        pet(Cat, "siames_macho.jpg", "Siamês", "Amarelo e Preto", Male, "Tom"),
        pet(Cat, "siames_femea.jpg", "Siamês", "Amarelo e Preto", Female, "Jade"),
        pet(Cat, "sphynx_macho.jpg", "Sphynx", "Branco", Male, "Amon"),
        pet(Cat, "sphynx_femea.jpg", "Sphynx", "Branco", Female, "Cleópatra"),
        // Fish
        pet(Fish, "neon_macho.jpg", "Tetra Neon", "Vermelho e Azul", Male, "Flash"),
        pet(Fish, "neon_femea.jpg", "Tetra Neon", "Vermelho e Azul", Female, "Nemo"),
        pet(Fish, "matogrosso_macho.jpg", "Mato Grosso", "Laranja", Male, "Sunny"),
        pet(Fish, "matogrosso_femea.jpg", "Mato Grosso", "Laranja", Female, "Aurora"),
        pet(Fish, "limpavidro_macho.jpg", "Limpa Vidro", "Verde e Branco", Male, "Verde"),
        pet(Fish, "limpavidro_femea.jpg", "Limpa Vidro", "Verde e Branco", Female, "Jade"),
        pet(Fish, "tanictis_macho.jpg", "Tanictis", "Vermelho", Male, "Rubi"),
        pet(Fish, "tanictis_femea.jpg", "Tanictis", "Vermelho", Female, "Scarlet"),
        pet(Fish, "acara_macho.jpg", "Acará Bandeira", "Preto", Male, "Shadow"),
        pet(Fish, "acara_femea.jpg", "Acará Bandeira", "Preto", Female, "Onix"),
    ]
}
