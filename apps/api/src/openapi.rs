use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Greenroom API",
        version = "1.0.0",
        description = "Mock interview practice API: question catalogs and transcript analysis with coach feedback"
    ),
    tags(
        (name = "interview", description = "Interview questions and transcript analysis")
    )
)]
pub struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();

    doc.merge(greenroom_api_interview::openapi());

    doc
}

pub fn write_openapi_json() -> std::io::Result<std::path::PathBuf> {
    let doc = openapi();
    let json = serde_json::to_string_pretty(&doc)
        .map_err(|e| std::io::Error::other(format!("serialize openapi: {e}")))?;

    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("openapi.gen.json");
    std::fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    #[test]
    fn gen_openapi_json() {
        super::write_openapi_json().unwrap();
    }
}
