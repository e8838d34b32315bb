#![allow(dead_code)]

use std::io::Cursor;

use avatar_relay::{
    app::{envy::Envy, router::build_router},
    AppState,
};
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use image::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};
use serde_json::Value;
use wiremock::MockServer;

pub const API_KEY: &str = "SG_test_key";
pub const SEGMIND_PATH: &str = "/v1/potraitsd1.5-txt2img";
const BOUNDARY: &str = "avatar-relay-test-boundary";

pub enum Part<'a> {
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
    Text {
        name: &'a str,
        value: &'a str,
    },
}

pub fn envy_for(server: &MockServer) -> Envy {
    Envy::with_upstream(API_KEY, &format!("{}{}", server.uri(), SEGMIND_PATH))
}

pub fn app_with(envy: Envy) -> Router {
    build_router(AppState::new(envy)).expect("default CORS origin is valid")
}

pub fn app_for(server: &MockServer) -> Router {
    app_with(envy_for(server))
}

pub fn sample_image(width: u32, height: u32, format: ImageOutputFormat) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 3) as u8, (y * 5) as u8, 200, 255])
    });
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), format)
        .unwrap();
    buf
}

pub fn png(width: u32, height: u32) -> Vec<u8> {
    sample_image(width, height, ImageOutputFormat::Png)
}

pub fn image_part(data: &[u8]) -> Part<'_> {
    Part::File {
        name: "file",
        file_name: "me.png",
        content_type: "image/png",
        data,
    }
}

pub fn style_part(value: &str) -> Part<'_> {
    Part::Text {
        name: "style",
        value,
    }
}

pub fn multipart_request(uri: &str, parts: &[Part]) -> Request<Body> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::File {
                name,
                file_name,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                        name, file_name, content_type
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn json_body<B>(response: Response<B>) -> Value
where
    B: hyper::body::HttpBody,
    B::Error: std::fmt::Debug,
{
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// noise keeps the PNG close to its raw size
pub fn noisy_png(width: u32, height: u32) -> Vec<u8> {
    let mut seed: u32 = 0x2545_f491;
    let img = RgbaImage::from_fn(width, height, |_, _| {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let [r, g, b, _] = seed.to_le_bytes();
        Rgba([r, g, b, 255])
    });
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)
        .unwrap();
    buf
}
