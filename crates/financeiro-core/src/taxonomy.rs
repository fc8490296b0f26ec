//! Category taxonomy used for keyword classification
//!
//! A taxonomy is an explicitly ordered list of `(category, keywords)` pairs.
//! Classification walks the categories in that order and the first category
//! owning a keyword contained in the text wins, so the order is part of the
//! contract and is preserved through JSON round-trips.
//!
//! Matching is case-insensitive substring containment, not word matching:
//! the keyword "bar" also matches "barato". Users tune this by editing the
//! keyword lists.

use std::fmt;
use std::sync::OnceLock;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::{Error, Result};

/// Category assigned when no keyword matches; it can never be removed
pub const FALLBACK_CATEGORY: &str = "Outros";

/// Built-in taxonomy, in classification order
const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Alimentação",
        &[
            "comida",
            "restaurante",
            "lanche",
            "paçoca",
            "doce",
            "amendoim",
            "pizza",
            "hambúrguer",
            "café",
            "almoço",
            "jantar",
        ],
    ),
    (
        "Transporte",
        &[
            "uber",
            "99",
            "taxi",
            "ônibus",
            "metrô",
            "combustível",
            "gasolina",
            "etanol",
            "estacionamento",
        ],
    ),
    (
        "Moradia",
        &[
            "aluguel",
            "condomínio",
            "iptu",
            "água",
            "luz",
            "energia",
            "gás",
            "internet",
            "wifi",
        ],
    ),
    (
        "Saúde",
        &[
            "médico",
            "consulta",
            "exame",
            "remédio",
            "farmácia",
            "hospital",
            "plano",
            "saúde",
            "dentista",
        ],
    ),
    (
        "Educação",
        &[
            "escola",
            "faculdade",
            "universidade",
            "curso",
            "livro",
            "material",
            "mensalidade",
        ],
    ),
    (
        "Lazer",
        &[
            "cinema", "teatro", "show", "bar", "balada", "viagem", "hotel", "passeio", "jogo",
        ],
    ),
    (
        "Vestuário",
        &["roupa", "sapato", "bolsa", "acessório", "loja", "shopping"],
    ),
    (
        "Serviços",
        &[
            "manicure",
            "cabeleireiro",
            "lavanderia",
            "limpeza",
            "manutenção",
        ],
    ),
    (FALLBACK_CATEGORY, &[]),
];

/// Shared built-in taxonomy, used when the caller supplies none
pub fn default_taxonomy() -> &'static CategoryTaxonomy {
    static DEFAULT: OnceLock<CategoryTaxonomy> = OnceLock::new();
    DEFAULT.get_or_init(CategoryTaxonomy::default)
}

/// A named category and its ordered keyword list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Category {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keywords: Vec::new(),
        }
    }

    /// Whether any keyword is contained in the already lower-cased text
    fn matches_lowercase(&self, lower_text: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|keyword| {
                let keyword = keyword.trim().to_lowercase();
                // An empty keyword would be contained in every text
                !keyword.is_empty() && lower_text.contains(&keyword)
            })
            .map(String::as_str)
    }
}

/// Ordered mapping of category name to keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTaxonomy {
    categories: Vec<Category>,
}

impl Default for CategoryTaxonomy {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|(name, keywords)| Category {
                    name: name.to_string(),
                    keywords: keywords.iter().map(|k| k.to_string()).collect(),
                })
                .collect(),
        }
    }
}

impl CategoryTaxonomy {
    /// Taxonomy containing only the fallback category
    pub fn empty() -> Self {
        Self {
            categories: vec![Category::new(FALLBACK_CATEGORY)],
        }
    }

    /// Build a taxonomy from ordered pairs
    ///
    /// Duplicate names keep the position of the first occurrence and the
    /// keywords of the last one. The fallback is appended when missing.
    pub fn from_pairs<I, N, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, Vec<K>)>,
        N: Into<String>,
        K: Into<String>,
    {
        let mut taxonomy = Self {
            categories: Vec::new(),
        };
        for (name, keywords) in pairs {
            taxonomy.upsert(name.into(), keywords.into_iter().map(Into::into).collect());
        }
        taxonomy.ensure_fallback();
        taxonomy
    }

    fn upsert(&mut self, name: String, keywords: Vec<String>) {
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.keywords = keywords,
            None => self.categories.push(Category { name, keywords }),
        }
    }

    fn ensure_fallback(&mut self) {
        if !self.contains(FALLBACK_CATEGORY) {
            self.categories.push(Category::new(FALLBACK_CATEGORY));
        }
    }

    /// Categories in classification order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    pub fn keywords(&self, name: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.keywords.as_slice())
    }

    /// Classify text: first category (in order) with a contained keyword,
    /// otherwise the fallback
    pub fn classify(&self, text: &str) -> &str {
        let lower = text.to_lowercase();
        for category in &self.categories {
            if let Some(keyword) = category.matches_lowercase(&lower) {
                debug!(
                    "Category '{}' matched by keyword '{}'",
                    category.name, keyword
                );
                return &category.name;
            }
        }
        FALLBACK_CATEGORY
    }

    /// Append a new category with no keywords
    pub fn add_category(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Taxonomy("Category name cannot be empty".to_string()));
        }
        if self.contains(name) {
            return Err(Error::Taxonomy(format!(
                "Category '{}' already exists",
                name
            )));
        }
        self.categories.push(Category::new(name));
        Ok(())
    }

    /// Remove a category; the fallback is protected
    pub fn remove_category(&mut self, name: &str) -> Result<Category> {
        if name == FALLBACK_CATEGORY {
            return Err(Error::Taxonomy(format!(
                "Category '{}' cannot be removed",
                FALLBACK_CATEGORY
            )));
        }
        let index = self
            .categories
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| Error::NotFound(format!("Category '{}'", name)))?;
        Ok(self.categories.remove(index))
    }

    /// Add a keyword to a category. Returns false when it was already there.
    pub fn add_keyword(&mut self, category: &str, keyword: &str) -> Result<bool> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(Error::Taxonomy("Keyword cannot be empty".to_string()));
        }
        let entry = self
            .categories
            .iter_mut()
            .find(|c| c.name == category)
            .ok_or_else(|| Error::NotFound(format!("Category '{}'", category)))?;
        if entry.keywords.iter().any(|k| k == keyword) {
            return Ok(false);
        }
        entry.keywords.push(keyword.to_string());
        Ok(true)
    }

    /// Remove every occurrence of a keyword. Returns whether anything changed.
    pub fn remove_keyword(&mut self, category: &str, keyword: &str) -> Result<bool> {
        let keyword = keyword.trim();
        let entry = self
            .categories
            .iter_mut()
            .find(|c| c.name == category)
            .ok_or_else(|| Error::NotFound(format!("Category '{}'", category)))?;
        let before = entry.keywords.len();
        entry.keywords.retain(|k| k != keyword);
        Ok(entry.keywords.len() != before)
    }
}

impl Serialize for CategoryTaxonomy {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.keywords)?;
        }
        map.end()
    }
}

struct TaxonomyVisitor;

impl<'de> Visitor<'de> for TaxonomyVisitor {
    type Value = CategoryTaxonomy;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping category names to keyword lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        // Entries are read in document order, which becomes the match order
        let mut pairs: Vec<(String, Vec<String>)> = Vec::new();
        while let Some((name, keywords)) = access.next_entry::<String, Vec<String>>()? {
            pairs.push((name, keywords));
        }
        Ok(CategoryTaxonomy::from_pairs(pairs))
    }
}

impl<'de> Deserialize<'de> for CategoryTaxonomy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(TaxonomyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let taxonomy = CategoryTaxonomy::default();
        let names: Vec<&str> = taxonomy.names().collect();
        assert_eq!(
            names,
            vec![
                "Alimentação",
                "Transporte",
                "Moradia",
                "Saúde",
                "Educação",
                "Lazer",
                "Vestuário",
                "Serviços",
                "Outros"
            ]
        );
        assert_eq!(taxonomy.keywords(FALLBACK_CATEGORY), Some(&[][..]));
    }

    #[test]
    fn test_classify_first_category_wins() {
        let taxonomy = CategoryTaxonomy::default();
        assert_eq!(taxonomy.classify("paguei a conta de luz"), "Moradia");
        // "paçoca" (Alimentação) is checked before "plano" (Saúde)
        assert_eq!(
            taxonomy.classify("R$30 em paçoca, R$200 no plano médico"),
            "Alimentação"
        );
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let taxonomy = CategoryTaxonomy::default();
        assert_eq!(taxonomy.classify("Corrida de UBER"), "Transporte");

        let custom = CategoryTaxonomy::from_pairs(vec![("Pets", vec!["RAÇÃO"])]);
        assert_eq!(custom.classify("comprei ração"), "Pets");
    }

    #[test]
    fn test_classify_substring_over_match() {
        // Known limitation: substring containment, not word match
        let taxonomy = CategoryTaxonomy::default();
        assert_eq!(taxonomy.classify("um sapato barato"), "Lazer");
    }

    #[test]
    fn test_classify_fallback() {
        let taxonomy = CategoryTaxonomy::default();
        assert_eq!(taxonomy.classify("coisas diversas"), FALLBACK_CATEGORY);
        assert_eq!(CategoryTaxonomy::empty().classify("pizza"), FALLBACK_CATEGORY);
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        let taxonomy = CategoryTaxonomy::from_pairs(vec![("Tudo", vec!["", "  "])]);
        assert_eq!(taxonomy.classify("qualquer coisa"), FALLBACK_CATEGORY);
    }

    #[test]
    fn test_add_keyword_then_classify() {
        let mut taxonomy = CategoryTaxonomy::default();
        assert_eq!(taxonomy.classify("mensalidade da academia"), "Educação");
        assert_eq!(taxonomy.classify("academia"), FALLBACK_CATEGORY);

        assert!(taxonomy.add_keyword("Saúde", "academia").unwrap());
        assert_eq!(taxonomy.classify("academia"), "Saúde");

        // Adding again is a no-op
        assert!(!taxonomy.add_keyword("Saúde", " academia ").unwrap());
        assert_eq!(
            taxonomy.keywords("Saúde").unwrap().iter().filter(|k| *k == "academia").count(),
            1
        );
    }

    #[test]
    fn test_add_keyword_errors() {
        let mut taxonomy = CategoryTaxonomy::default();
        assert!(matches!(
            taxonomy.add_keyword("Inexistente", "x"),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            taxonomy.add_keyword("Lazer", "   "),
            Err(Error::Taxonomy(_))
        ));
    }

    #[test]
    fn test_remove_keyword() {
        let mut taxonomy = CategoryTaxonomy::default();
        assert!(taxonomy.remove_keyword("Lazer", "bar").unwrap());
        assert_eq!(taxonomy.classify("um sapato barato"), "Vestuário");
        assert!(!taxonomy.remove_keyword("Lazer", "bar").unwrap());
    }

    #[test]
    fn test_remove_keyword_trims_like_add() {
        let mut taxonomy = CategoryTaxonomy::default();
        assert!(taxonomy.add_keyword("Saúde", " academia ").unwrap());
        assert!(taxonomy.remove_keyword("Saúde", " academia ").unwrap());
        assert_eq!(taxonomy.classify("academia"), FALLBACK_CATEGORY);
    }

    #[test]
    fn test_add_and_remove_category() {
        let mut taxonomy = CategoryTaxonomy::default();
        taxonomy.add_category("  Pets ").unwrap();
        assert!(taxonomy.contains("Pets"));
        assert_eq!(taxonomy.names().last(), Some("Pets"));

        assert!(matches!(taxonomy.add_category("Pets"), Err(Error::Taxonomy(_))));
        assert!(matches!(taxonomy.add_category(""), Err(Error::Taxonomy(_))));

        let removed = taxonomy.remove_category("Pets").unwrap();
        assert_eq!(removed.name, "Pets");
        assert!(matches!(
            taxonomy.remove_category("Pets"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_fallback_is_protected() {
        let mut taxonomy = CategoryTaxonomy::default();
        assert!(matches!(
            taxonomy.remove_category(FALLBACK_CATEGORY),
            Err(Error::Taxonomy(_))
        ));
        assert!(taxonomy.contains(FALLBACK_CATEGORY));
    }

    #[test]
    fn test_json_preserves_order() {
        let json = r#"{"Zeta": ["z"], "Alfa": ["a"], "Outros": []}"#;
        let taxonomy: CategoryTaxonomy = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = taxonomy.names().collect();
        assert_eq!(names, vec!["Zeta", "Alfa", "Outros"]);

        let back = serde_json::to_string(&taxonomy).unwrap();
        assert_eq!(back, r#"{"Zeta":["z"],"Alfa":["a"],"Outros":[]}"#);
    }

    #[test]
    fn test_json_appends_missing_fallback() {
        let taxonomy: CategoryTaxonomy = serde_json::from_str(r#"{"Pets": ["ração"]}"#).unwrap();
        assert_eq!(taxonomy.len(), 2);
        assert!(taxonomy.contains(FALLBACK_CATEGORY));
    }

    #[test]
    fn test_json_rejects_wrong_shape() {
        assert!(serde_json::from_str::<CategoryTaxonomy>(r#"["Pets"]"#).is_err());
        assert!(serde_json::from_str::<CategoryTaxonomy>(r#"{"Pets": "ração"}"#).is_err());
    }

    #[test]
    fn test_default_round_trips_through_json() {
        let taxonomy = CategoryTaxonomy::default();
        let json = serde_json::to_string(&taxonomy).unwrap();
        let back: CategoryTaxonomy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, taxonomy);
    }
}
