use crate::errors::MarketplaceResult;
use crate::structs::category_facet::CategoryFacets;

pub struct FacetLogger;

impl FacetLogger {

    pub fn render_table(facets: &CategoryFacets) -> String {
        let width = facets
            .data
            .iter()
            .map(|facet| facet.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("CATEGORY".len());

        let mut out = String::new();
        if facets.is_placeholder_data {
            out.push_str("⏳ Categories are still loading (placeholder data)\n");
        }
        out.push_str(&format!("{:<width$}  COUNT\n", "CATEGORY"));
        out.push_str(&format!("{}  -----\n", "-".repeat(width)));
        for facet in facets.data.iter() {
            out.push_str(&format!("{:<width$}  {:>5}\n", facet.name, facet.count));
        }
        if facets.data.is_empty() {
            out.push_str("(no categories)\n");
        }
        out
    }

    pub fn render_json(facets: &CategoryFacets) -> MarketplaceResult<String> {
        Ok(serde_json::to_string_pretty(facets)?)
    }

    pub fn print_table(facets: &CategoryFacets) {
        println!("🏷️  MARKETPLACE CATEGORIES");
        println!("=========================");
        print!("{}", Self::render_table(facets));
    }

    pub fn print_json(facets: &CategoryFacets) -> MarketplaceResult<()> {
        println!("{}", Self::render_json(facets)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::category_facet::CategoryFacet;
    use std::sync::Arc;

    fn facets(is_placeholder_data: bool, data: Vec<CategoryFacet>) -> CategoryFacets {
        CategoryFacets { is_placeholder_data, data: Arc::new(data) }
    }

    #[test]
    fn table_aligns_counts() {
        let table = FacetLogger::render_table(&facets(
            false,
            vec![CategoryFacet::new("Bridges", 12), CategoryFacet::new("DeFi", 3)],
        ));
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "CATEGORY  COUNT");
        assert_eq!(lines[2], "Bridges      12");
        assert_eq!(lines[3], "DeFi          3");
    }

    #[test]
    fn table_marks_placeholder_and_empty() {
        let table = FacetLogger::render_table(&facets(true, Vec::new()));
        assert!(table.starts_with("⏳"));
        assert!(table.ends_with("(no categories)\n"));
    }

    #[test]
    fn json_uses_camel_case() {
        let json = FacetLogger::render_json(&facets(false, vec![CategoryFacet::new("A", 2)])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["isPlaceholderData"], false);
        assert_eq!(value["data"][0]["name"], "A");
        assert_eq!(value["data"][0]["count"], 2);
    }
}
