use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDoc {
    pub id: String,
    pub title: String,
    pub img_url: String,
    pub price: f64,
    pub description: String,
}

/// Product data
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDoc {
    pub title: String,
    pub img_url: String,
    pub price: f64,
    pub description: String,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct FieldIssueDoc { pub field: String, pub message: String }

#[derive(ToSchema)]
pub struct ValidationErrorDoc {
    pub message: String,
    pub issues: Vec<FieldIssueDoc>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Products API", description = "Create, list and delete products"),
    paths(
        crate::routes::health,
        crate::routes::products::create,
        crate::routes::products::list,
        crate::routes::products::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ProductDoc,
            CreateProductDoc,
            MessageDoc,
            FieldIssueDoc,
            ValidationErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "Products")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_product_operations() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = &doc["paths"];
        assert_eq!(paths["/products"]["post"]["operationId"], "createProduct");
        assert_eq!(paths["/products"]["get"]["operationId"], "listProducts");
        assert_eq!(paths["/products/{id}"]["delete"]["operationId"], "deleteProduct");
        assert!(paths["/products"]["post"]["responses"]["409"].is_object());
        assert!(paths["/products/{id}"]["delete"]["responses"]["404"].is_object());
        assert!(paths["/products/{id}"]["delete"]["responses"]["400"].is_object());
        assert!(doc["components"]["schemas"]["ProductDoc"]["properties"]["imgUrl"].is_object());
    }
}
