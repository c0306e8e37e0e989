#[macro_export]
macro_rules! post {
    ($token:expr, $url:expr, $body:expr) => {{
        use reqwest::header::CONTENT_TYPE;
        use $crate::http::{Headers, ResponseHandler};

        $crate::http::HttpClient::new()
            .post($url)
            .default_headers($token)
            .header(CONTENT_TYPE, "application/json")
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}
