//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Gerenciamento de Produtos",
        version = "1.0",
        description = "API para gerenciamento de produtos com operações CRUD"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(crate::api::health::ready_handler),
    tags(
        (name = "health", description = "Liveness and readiness checks")
    )
)]
struct ServiceDoc;

/// Combined OpenAPI documentation for Products API
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        ServiceDoc::openapi().merge_from(domain_products::ApiDoc::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_combines_service_and_domain() {
        let doc = ApiDoc::openapi();

        assert_eq!(doc.info.title, "API de Gerenciamento de Produtos");
        assert_eq!(doc.info.version, "1.0");
        assert!(doc.paths.paths.contains_key("/produtos"));
        assert!(doc.paths.paths.contains_key("/produtos/{id}"));
        assert!(doc.paths.paths.contains_key("/ready"));
    }
}
