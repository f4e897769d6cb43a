use proptest::{collection::vec, option, prelude::*};

use crate::layout::{
    Base, Button, ContentMode, FlexDirection, ImageView, KeyboardType, Label, Map, Node, Radio,
    Swiper, Switch, TextAlignment, TextField, Video, View,
};

/// An arbitrary layout node, possibly with nested children
#[derive(Clone, Debug, PartialEq)]
pub struct SomeNode(pub Node);

impl From<SomeNode> for Node {
    fn from(wrapper: SomeNode) -> Self {
        wrapper.0
    }
}

impl Arbitrary for SomeNode {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        leaf()
            .prop_recursive(3, 24, 4, |inner| {
                prop_oneof![
                    (
                        option::of(any::<u64>()),
                        option::of(flex_direction()),
                        vec(inner.clone(), 0..4)
                    )
                        .prop_map(|(id, direction, children)| Node::from(View {
                            id,
                            direction,
                            children: children.into(),
                        })),
                    (
                        option::of(any::<u64>()),
                        vec(inner, 0..4),
                        option::of(any::<u64>()),
                        option::of(any::<bool>())
                    )
                        .prop_map(|(id, pages, interval_ms, looping)| Node::from(Swiper {
                            id,
                            pages: pages.into(),
                            interval_ms,
                            looping,
                        })),
                ]
            })
            .prop_map(SomeNode)
            .boxed()
    }
}

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,12}"
}

fn flex_direction() -> impl Strategy<Value = FlexDirection> {
    prop_oneof![
        Just(FlexDirection::Row),
        Just(FlexDirection::Column),
        Just(FlexDirection::RowReverse),
        Just(FlexDirection::ColumnReverse),
    ]
}

fn content_mode() -> impl Strategy<Value = ContentMode> {
    prop_oneof![
        Just(ContentMode::Fill),
        Just(ContentMode::AspectFit),
        Just(ContentMode::AspectFill),
        Just(ContentMode::Center),
    ]
}

fn text_alignment() -> impl Strategy<Value = TextAlignment> {
    prop_oneof![
        Just(TextAlignment::Leading),
        Just(TextAlignment::Center),
        Just(TextAlignment::Trailing),
    ]
}

fn keyboard_type() -> impl Strategy<Value = KeyboardType> {
    prop_oneof![
        Just(KeyboardType::Text),
        Just(KeyboardType::Number),
        Just(KeyboardType::Email),
        Just(KeyboardType::Phone),
        Just(KeyboardType::Url),
    ]
}

fn leaf() -> BoxedStrategy<Node> {
    prop_oneof![
        option::of(any::<u64>()).prop_map(|id| Node::from(Base { id })),
        (text(), option::of(text()))
            .prop_map(|(label, action)| Node::from(Button { label, action })),
        ("[a-z]{1,8}\\.png", option::of(content_mode()))
            .prop_map(|(src, content_mode)| Node::from(ImageView { src, content_mode })),
        (option::of(text()), option::of(text()), option::of(keyboard_type())).prop_map(
            |(placeholder, text, keyboard)| Node::from(TextField {
                placeholder,
                text,
                keyboard,
            })
        ),
        (
            text(),
            option::of(text_alignment()),
            option::of(6.0f64..72.0)
        )
            .prop_map(|(text, alignment, font_size)| Node::from(Label {
                text,
                alignment,
                font_size,
            })),
        ("https://[a-z]{1,8}\\.mp4", option::of(text()), option::of(any::<bool>()))
            .prop_map(|(url, poster, autoplay)| Node::from(Video {
                url,
                poster,
                autoplay,
            })),
        (text(), text(), option::of(any::<bool>()))
            .prop_map(|(group, value, selected)| Node::from(Radio {
                group,
                value,
                selected,
            })),
        (-90.0f64..90.0, -180.0f64..180.0, option::of(any::<u8>()))
            .prop_map(|(latitude, longitude, zoom)| Node::from(Map {
                latitude,
                longitude,
                zoom,
            })),
        (any::<bool>(), option::of(text()))
            .prop_map(|(is_on, tint)| Node::from(Switch { is_on, tint })),
    ]
    .boxed()
}
