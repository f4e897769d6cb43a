use serde_json::{json, Value};

use crate::layout::{
    Base, Button, ContentMode, FlexDirection, ImageView, KeyboardType, Label, Map, Node, Radio,
    Swiper, Switch, TextAlignment, TextField, Video, View,
};

/// One node of every kind, containers included
pub(crate) fn every_kind() -> Vec<Node> {
    vec![
        Node::from(Base { id: Some(1) }),
        Node::from(Button::new("OK").action("submit")),
        Node::from(ImageView {
            src: "logo.png".to_string(),
            content_mode: Some(ContentMode::AspectFit),
        }),
        Node::from(TextField {
            placeholder: Some("Email".to_string()),
            text: None,
            keyboard: Some(KeyboardType::Email),
        }),
        Node::from(
            View::with_children([Node::from(Label::new("Hi")), Node::from(Base::default())])
                .direction(FlexDirection::Column),
        ),
        Node::from(Label {
            text: "Title".to_string(),
            alignment: Some(TextAlignment::Center),
            font_size: Some(17.5),
        }),
        Node::from(Video {
            url: "https://example.com/intro.mp4".to_string(),
            poster: None,
            autoplay: Some(true),
        }),
        Node::from(Radio {
            group: "size".to_string(),
            value: "m".to_string(),
            selected: Some(true),
        }),
        Node::from(Swiper {
            id: Some(7),
            pages: vec![Node::from(ImageView {
                src: "page.png".to_string(),
                content_mode: None,
            })]
            .into(),
            interval_ms: Some(3000),
            looping: None,
        }),
        Node::from(Map {
            latitude: 52.52,
            longitude: 13.405,
            zoom: Some(12),
        }),
        Node::from(Switch {
            is_on: true,
            tint: None,
        }),
    ]
}

/// The wire form of [`every_kind`]
pub(crate) fn every_kind_json() -> Value {
    json!([
        { "tag": "base", "payload": { "id": 1 } },
        { "tag": "button", "payload": { "label": "OK", "action": "submit" } },
        { "tag": "imageView", "payload": { "src": "logo.png", "contentMode": "aspectFit" } },
        { "tag": "textField", "payload": { "placeholder": "Email", "keyboard": "email" } },
        {
            "tag": "view",
            "payload": {
                "direction": "column",
                "children": [
                    { "tag": "label", "payload": { "text": "Hi" } },
                    { "tag": "base", "payload": {} }
                ]
            }
        },
        {
            "tag": "label",
            "payload": { "text": "Title", "alignment": "center", "fontSize": 17.5 }
        },
        {
            "tag": "video",
            "payload": { "url": "https://example.com/intro.mp4", "autoplay": true }
        },
        { "tag": "radio", "payload": { "group": "size", "value": "m", "selected": true } },
        {
            "tag": "swiper",
            "payload": {
                "id": 7,
                "pages": [{ "tag": "imageView", "payload": { "src": "page.png" } }],
                "intervalMs": 3000
            }
        },
        { "tag": "map", "payload": { "latitude": 52.52, "longitude": 13.405, "zoom": 12 } },
        { "tag": "switch", "payload": { "isOn": true } }
    ])
}
