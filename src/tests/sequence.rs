use pretty_assertions as pretty;
use proptest::{collection::vec, prelude::*};
use serde_json::json;

use crate::{
    builder::CodecBuilder,
    config::DecodePolicy,
    error::Error,
    layout::{self, Base, Button, Label, Node, View},
    registry::Tagged,
    sequence::SequenceCodec,
    test_utils::SomeNode,
    tests::fixtures::{every_kind, every_kind_json},
};

#[test_log::test]
fn test_base_and_button_wire_form() -> anyhow::Result<()> {
    let codec = SequenceCodec::new(layout::registry());
    let nodes = vec![Node::from(Base::default()), Node::from(Button::new("OK"))];
    let wire = json!([
        { "tag": "base", "payload": {} },
        { "tag": "button", "payload": { "label": "OK" } }
    ]);

    pretty::assert_eq!(codec.encode(&nodes)?, wire);

    let decoded = codec.decode(wire)?;
    pretty::assert_eq!(decoded.len(), 2);
    assert!(decoded[0].downcast_ref::<Base>().is_some());
    assert_eq!(
        decoded[1].downcast_ref::<Button>().map(|b| b.label.as_str()),
        Some("OK")
    );

    Ok(())
}

#[test_log::test]
fn test_every_kind_keeps_order() -> anyhow::Result<()> {
    let codec = SequenceCodec::new(layout::registry());

    pretty::assert_eq!(codec.encode(&every_kind())?, every_kind_json());

    let decoded = codec.decode(every_kind_json())?;
    let tags: Vec<_> = decoded.iter().map(|node| node.tag()).collect();

    pretty::assert_eq!(
        tags,
        vec![
            "base",
            "button",
            "imageView",
            "textField",
            "view",
            "label",
            "video",
            "radio",
            "swiper",
            "map",
            "switch"
        ]
    );
    pretty::assert_eq!(decoded, every_kind());

    Ok(())
}

#[test_log::test]
fn test_empty_sequence() -> anyhow::Result<()> {
    let codec = SequenceCodec::new(layout::registry());

    pretty::assert_eq!(codec.encode(&[])?, json!([]));
    assert!(codec.decode(json!([]))?.is_empty());

    Ok(())
}

#[test_log::test]
fn test_fail_fast_reports_the_element() {
    let codec = SequenceCodec::new(layout::registry());
    let result = codec.decode(json!([
        { "tag": "base", "payload": {} },
        { "tag": "slider", "payload": {} },
        { "tag": "button", "payload": {} }
    ]));

    let error = result.unwrap_err();
    assert_eq!(error.index(), Some(1));
    assert_eq!(error.tag(), Some("slider"));
    assert!(matches!(error.root(), Error::UnknownTag { .. }));
}

#[test_log::test]
fn test_skip_invalid_keeps_a_record() -> anyhow::Result<()> {
    let config = CodecBuilder::default().skip_invalid().build()?;
    let codec = SequenceCodec::with_config(layout::registry(), &config);
    assert_eq!(codec.policy(), DecodePolicy::SkipInvalid);

    let report = codec.decode_report(json!([
        { "tag": "label", "payload": { "text": "one" } },
        { "tag": "slider", "payload": {} },
        { "tag": "button", "payload": {} },
        { "tag": "label", "payload": { "text": "two" } }
    ]))?;

    assert!(!report.is_complete());
    pretty::assert_eq!(
        report.values,
        vec![Node::from(Label::new("one")), Node::from(Label::new("two"))]
    );

    let rejected: Vec<_> = report.rejected.iter().map(|r| r.index).collect();
    pretty::assert_eq!(rejected, vec![1, 2]);
    assert!(matches!(report.rejected[0].error, Error::UnknownTag { .. }));
    assert!(matches!(
        report.rejected[1].error,
        Error::MalformedPayload { .. }
    ));

    Ok(())
}

#[test_log::test]
fn test_skip_invalid_reaches_nested_children() -> anyhow::Result<()> {
    let codec = SequenceCodec::new(layout::registry()).with_policy(DecodePolicy::SkipInvalid);

    let report = codec.decode_report(json!([
        {
            "tag": "view",
            "payload": {
                "children": [
                    { "tag": "label", "payload": { "text": "kept" } },
                    { "tag": "slider", "payload": {} }
                ]
            }
        },
        { "tag": "base", "payload": {} }
    ]))?;

    assert!(report.is_complete());
    pretty::assert_eq!(
        report.values,
        vec![
            Node::from(View::with_children([Node::from(Label::new("kept"))])),
            Node::from(Base::default())
        ]
    );

    Ok(())
}

#[test_log::test]
fn test_fail_fast_reaches_nested_children() {
    let codec = SequenceCodec::new(layout::registry());
    let error = codec
        .decode(json!([
            { "tag": "base", "payload": {} },
            {
                "tag": "view",
                "payload": {
                    "children": [
                        { "tag": "label", "payload": { "text": "fine" } },
                        { "tag": "slider", "payload": {} }
                    ]
                }
            }
        ]))
        .unwrap_err();

    assert_eq!(error.index(), Some(1));
    assert_eq!(error.path(), vec![1, 1]);
    assert_eq!(error.tag(), Some("slider"));
    assert!(matches!(error.root(), Error::UnknownTag { .. }));
}

#[test_log::test]
fn test_skip_invalid_still_rejects_a_non_array() {
    let codec = SequenceCodec::new(layout::registry()).with_policy(DecodePolicy::SkipInvalid);

    assert!(matches!(
        codec.decode(json!({ "tag": "base", "payload": {} })),
        Err(Error::TypeMismatch { ref field, .. }) if field == "<sequence>"
    ));
}

#[test_log::test]
fn test_text_round_trip() -> anyhow::Result<()> {
    let codec = SequenceCodec::new(layout::registry());

    let text = codec.encode_string(&every_kind())?;
    pretty::assert_eq!(codec.decode_str(&text)?, every_kind());
    pretty::assert_eq!(codec.decode_slice(text.as_bytes())?, every_kind());

    Ok(())
}

#[test_log::test]
fn test_invalid_text_is_a_json_error() {
    let codec = SequenceCodec::new(layout::registry());

    assert!(matches!(codec.decode_str("[{"), Err(Error::Json(_))));
    assert!(matches!(codec.decode_slice(b"nope"), Err(Error::Json(_))));
}

proptest! {
    #[test]
    fn prop_round_trip_keeps_order(nodes in vec(any::<SomeNode>(), 0..8)) {
        let codec = SequenceCodec::new(layout::registry());
        let nodes: Vec<Node> = nodes.into_iter().map(Node::from).collect();

        let decoded = codec.decode(codec.encode(&nodes).unwrap()).unwrap();

        prop_assert_eq!(
            decoded.iter().map(|node| node.tag()).collect::<Vec<_>>(),
            nodes.iter().map(|node| node.tag()).collect::<Vec<_>>()
        );
        prop_assert_eq!(decoded, nodes);
    }
}
