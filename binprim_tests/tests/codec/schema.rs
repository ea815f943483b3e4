//! Hand-written stand-ins for what a schema layer would generate.

use binprim_types::types::{Bytes, Deser, Ser};
use binprim_types::{Decoder, DepthTracked, Encoder, Format, Result};
use std::collections::BTreeMap;

#[derive(PartialEq, Clone, Debug)]
pub enum Shape {
    Point,
    Circle { radius: f64 },
    Label(String, Option<u32>),
}
impl Ser for Shape {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        let mut enc = enc.enter_container()?;
        match self {
            Shape::Point => enc.encode_variant_index(0),
            Shape::Circle { radius } => {
                enc.encode_variant_index(1)?;
                enc.encode_f64(*radius)
            }
            Shape::Label(text, weight) => {
                enc.encode_variant_index(2)?;
                text.ser(&mut *enc)?;
                weight.ser(&mut *enc)
            }
        }
    }
}
impl Deser for Shape {
    fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self> {
        let mut dec = dec.enter_container()?;
        let shape = match dec.decode_variant_index_below(3)? {
            0 => Shape::Point,
            1 => Shape::Circle {
                radius: dec.decode_f64()?,
            },
            _ => {
                let text = String::deser(&mut *dec)?;
                let weight = Option::<u32>::deser(&mut *dec)?;
                Shape::Label(text, weight)
            }
        };
        Ok(shape)
    }
}

#[derive(PartialEq, Clone, Debug)]
pub struct Drawing {
    pub id: u128,
    pub offset: i128,
    pub name: String,
    pub initial: char,
    pub shapes: Vec<Shape>,
    pub attachments: BTreeMap<String, Bytes>,
    pub visible: bool,
}
impl Ser for Drawing {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        let mut enc = enc.enter_container()?;
        self.id.ser(&mut *enc)?;
        self.offset.ser(&mut *enc)?;
        self.name.ser(&mut *enc)?;
        self.initial.ser(&mut *enc)?;
        self.shapes.ser(&mut *enc)?;
        self.attachments.ser(&mut *enc)?;
        self.visible.ser(&mut *enc)
    }
}
impl Deser for Drawing {
    fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self> {
        let mut dec = dec.enter_container()?;
        Ok(Drawing {
            id: u128::deser(&mut *dec)?,
            offset: i128::deser(&mut *dec)?,
            name: String::deser(&mut *dec)?,
            initial: char::deser(&mut *dec)?,
            shapes: Vec::deser(&mut *dec)?,
            attachments: BTreeMap::deser(&mut *dec)?,
            visible: bool::deser(&mut *dec)?,
        })
    }
}

pub fn gen_drawing() -> Drawing {
    Drawing {
        id: (1u128 << 64) | u128::from(u64::MAX),
        offset: -(1i128 << 100),
        name: String::from("façade"),
        initial: 'ß',
        shapes: vec![
            Shape::Point,
            Shape::Circle { radius: 2.5 },
            Shape::Label(String::from("asdf"), None),
            Shape::Label(String::new(), Some(u32::MAX)),
        ],
        attachments: BTreeMap::from([
            (String::from("zxcv"), Bytes(vec![1, 2, 3])),
            (String::from("a"), Bytes(vec![])),
        ]),
        visible: true,
    }
}

/// A tree whose every node is one container. Nesting depth is only known at runtime.
#[derive(PartialEq, Debug)]
pub struct Tree(pub Vec<Tree>);

impl Tree {
    pub fn chain(depth: usize) -> Self {
        let mut tree = Tree(vec![]);
        for _ in 1..depth {
            tree = Tree(vec![tree]);
        }
        tree
    }
}
impl Ser for Tree {
    fn ser<F: Format>(&self, enc: &mut Encoder<F>) -> Result<()> {
        self.0.ser(enc)
    }
}
impl Deser for Tree {
    fn deser<F: Format>(dec: &mut Decoder<'_, F>) -> Result<Self> {
        Ok(Tree(Vec::deser(dec)?))
    }
}
