//! 目录领域记录

use serde::{Deserialize, Serialize};

/// 商品
///
/// 所有字段在创建时必填，创建后不可修改。缺失的 JSON 字段反序列化为空串，
/// 由服务层统一报告为缺失参数。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand_name: String,
    pub details: String,
    pub image_url: String,
}

/// 商品变体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variant {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub details: String,
}

/// 嵌入商品响应中的变体投影（不含 product_id）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantInfo {
    pub id: String,
    pub name: String,
    pub details: String,
}

impl From<Variant> for VariantInfo {
    fn from(variant: Variant) -> Self {
        Self {
            id: variant.id,
            name: variant.name,
            details: variant.details,
        }
    }
}

/// 带变体列表的商品，仅用于读路径
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductWithVariants {
    pub id: String,
    pub name: String,
    pub brand_name: String,
    pub details: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variant: Vec<VariantInfo>,
}

impl ProductWithVariants {
    pub fn with_variants(mut self, variants: Vec<VariantInfo>) -> Self {
        self.variant = variants;
        self
    }
}

impl From<Product> for ProductWithVariants {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            brand_name: product.brand_name,
            details: product.details,
            image_url: product.image_url,
            variant: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_list_omitted_when_empty() {
        let product = ProductWithVariants::from(Product {
            id: "1".to_string(),
            name: "p1".to_string(),
            brand_name: "b1".to_string(),
            details: "d".to_string(),
            image_url: "u".to_string(),
        });

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("variant").is_none());
        assert_eq!(json["brand_name"], "b1");
        assert_eq!(json["image_url"], "u");
    }

    #[test]
    fn test_variant_list_serialized_when_present() {
        let product = ProductWithVariants::default().with_variants(vec![VariantInfo {
            id: "1".to_string(),
            name: "v1".to_string(),
            details: "d".to_string(),
        }]);

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["variant"][0]["name"], "v1");
        assert!(json["variant"][0].get("product_id").is_none());
    }

    #[test]
    fn test_missing_json_fields_default_to_empty() {
        let product: Product = serde_json::from_str(r#"{"id":"1","name":"p1"}"#).unwrap();
        assert_eq!(product.id, "1");
        assert!(product.brand_name.is_empty());
        assert!(product.image_url.is_empty());
    }

    #[test]
    fn test_variant_info_drops_product_id() {
        let info = VariantInfo::from(Variant {
            id: "2".to_string(),
            product_id: "1".to_string(),
            name: "v2".to_string(),
            details: "d2".to_string(),
        });

        assert_eq!(info.id, "2");
        assert_eq!(info.name, "v2");
        assert_eq!(info.details, "d2");
    }
}
