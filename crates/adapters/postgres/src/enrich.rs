//! 列表查询的变体挂载

use catalog_errors::AppResult;
use catalog_ports::{ProductWithVariants, VariantInfo, VariantStore};

/// 按 `vid` 是否存在选择挂载单个变体或全部变体
///
/// 带 `vid` 时以 `(vid, product.id)` 查找，查不到返回 `NoRows`；
/// 不带 `vid` 时挂载商品的全部变体，没有变体得到空列表。
pub async fn attach_variants(
    variant_store: &dyn VariantStore,
    product: ProductWithVariants,
    vid: Option<&str>,
) -> AppResult<ProductWithVariants> {
    let variants = match vid {
        Some(vid) => {
            let variant = variant_store.get_by_id(vid, &product.id).await?;
            vec![VariantInfo::from(variant)]
        }
        None => variant_store.get_variant_data(&product.id).await?,
    };

    Ok(product.with_variants(variants))
}
