//! The bundled glyph set: 27 radicals and simple characters, in navigation order.
//!
//! Coordinates are grid units, y down. Each stroke's width responds to one or both audio
//! features; most start from [`DEFAULT_WIDTH`] in silence.

use crate::{
    character::glyph::Character,
    foundation::core::{Point, Size},
    stroke::{
        component::{StrokeComponent, StrokeKind},
        shapes::CutAngles,
        weight::{
            CENTROID_SPAN, DEFAULT_WIDTH, Feature,
            Feature::{Centroid, Loudness},
            LOUDNESS_SPAN, Remap, WeightMap,
        },
    },
};

/// Every bundled character, in navigation order.
pub fn characters() -> Vec<Character> {
    vec![
        qi(),
        yue(),
        jin(),
        mu(),
        shui(),
        huo(),
        tu(),
        gong(),
        ri(),
        ban(),
        yan(),
        cao(),
        shi(),
        mu2(),
        yi(),
        kou(),
        chong(),
        fu(),
        xin(),
        bao(),
        yu(),
        jin2(),
        zu(),
        chuo(),
        mian(),
        yang(),
        wei(),
    ]
}

fn stroke(kind: StrokeKind, points: &[[f64; 2]], weight: WeightMap) -> StrokeComponent {
    let points = points.iter().map(|&[x, y]| Point::new(x, y)).collect();
    StrokeComponent::new(kind, points, weight)
}

fn seg(points: &[[f64; 2]], weight: WeightMap) -> StrokeComponent {
    stroke(StrokeKind::Segment, points, weight)
}

fn mid(points: &[[f64; 2]], weight: WeightMap) -> StrokeComponent {
    stroke(StrokeKind::SegmentMid, points, weight)
}

fn arc(points: &[[f64; 2]], weight: WeightMap) -> StrokeComponent {
    stroke(StrokeKind::Arc, points, weight)
}

fn poly(points: &[[f64; 2]], weight: WeightMap) -> StrokeComponent {
    stroke(StrokeKind::Polyline, points, weight)
}

fn circle(points: &[[f64; 2]], weight: WeightMap) -> StrokeComponent {
    stroke(StrokeKind::Circle, points, weight)
}

fn lin(feature: Feature, from: [f64; 2], to: f64) -> WeightMap {
    WeightMap::linear(feature, from, to)
}

fn lin2(feature: Feature, from: [f64; 2], to: [f64; 2]) -> WeightMap {
    WeightMap::linear_between(feature, from, to)
}

/// Holds [`DEFAULT_WIDTH`] below `threshold`.
fn gate(feature: Feature, threshold: f64, above: WeightMap) -> WeightMap {
    WeightMap::gated(feature, threshold, WeightMap::constant(DEFAULT_WIDTH), above)
}

fn split(feature: Feature, threshold: f64, below: WeightMap, above: WeightMap) -> WeightMap {
    WeightMap::gated(feature, threshold, below, above)
}

fn prod(
    loudness_gain: f64,
    centroid_gain: f64,
    centroid_hi: f64,
    product_max: f64,
    to: f64,
) -> WeightMap {
    WeightMap::product(
        loudness_gain,
        centroid_gain,
        [0.0, centroid_hi],
        product_max,
        to,
    )
}

/// [`DEFAULT_WIDTH`] scaled straight by both factors, so loud bright input thins the stroke.
fn damped(loudness_gain: f64, centroid_gain: f64) -> WeightMap {
    WeightMap::Product {
        loudness: Remap::new(LOUDNESS_SPAN, [1.0, loudness_gain]),
        centroid: Remap::new(CENTROID_SPAN, [1.0, centroid_gain]),
        output: Remap::new([0.0, 1.0], [0.0, DEFAULT_WIDTH]),
    }
}

fn qi() -> Character {
    Character::new(
        "qi",
        "气",
        Size::new(10.0, 10.0),
        vec![
            seg(&[[0.0, 0.0], [0.0, 4.0]], lin(Centroid, [0.0, 8000.0], 100.0)),
            seg(
                &[[0.0, 4.0], [10.0, 4.0]],
                split(
                    Loudness,
                    60.0,
                    lin(Loudness, [0.0, 60.0], 20.0),
                    lin2(Loudness, [60.0, 180.0], [20.0, 1.0]),
                ),
            ),
            seg(&[[0.0, 7.0], [10.0, 7.0]], lin(Loudness, [0.0, 150.0], 60.0)),
            seg(&[[0.0, 10.0], [10.0, 10.0]], lin(Loudness, [0.0, 150.0], 15.0)),
        ],
    )
    .with_phonetic("qì")
}

fn yue() -> Character {
    Character::new(
        "yue",
        "月",
        Size::new(7.0, 12.0),
        vec![
            seg(
                &[[0.0, 0.0], [0.0, 12.0]],
                gate(Centroid, 1000.0, lin2(Centroid, [1000.0, 5000.0], [30.0, 10.0])),
            ),
            seg(&[[2.0, 4.0], [2.0, 8.0]], lin(Loudness, [0.0, 120.0], 100.0)),
            arc(&[[0.0, 0.5], [5.5, 6.0], [0.0, 11.5]], lin(Centroid, [0.0, 8000.0], 80.0)),
        ],
    )
    .with_phonetic("yuè")
}

fn jin() -> Character {
    Character::new(
        "jin",
        "金",
        Size::new(8.0, 13.0),
        vec![
            seg(
                &[[4.0, 0.5], [0.5, 4.0]],
                gate(Loudness, 50.0, lin(Loudness, [50.0, 150.0], 100.0)),
            ),
            seg(
                &[[7.5, 4.0], [4.0, 0.5]],
                gate(Loudness, 50.0, lin(Loudness, [50.0, 150.0], 100.0)),
            ),
            mid(&[[1.5, 3.5], [6.5, 3.5]], lin(Centroid, [0.0, 8000.0], 0.0)),
            mid(&[[4.0, 4.0], [4.0, 11.0]], lin(Centroid, [0.0, 8000.0], 0.0)),
            seg(
                &[[2.0, 6.5], [4.0, 8.5]],
                gate(Loudness, 50.0, lin(Loudness, [50.0, 150.0], 50.0)),
            ),
            seg(
                &[[4.0, 8.5], [6.0, 6.5]],
                gate(Loudness, 50.0, lin(Loudness, [50.0, 150.0], 50.0)),
            ),
            seg(&[[2.0, 8.5], [0.0, 10.5]], lin(Centroid, [0.0, 6000.0], 0.0)),
            seg(&[[8.0, 10.5], [6.0, 8.5]], lin(Centroid, [0.0, 6000.0], 0.0)),
            seg(
                &[[0.5, 13.0], [7.5, 13.0]],
                gate(Loudness, 50.0, lin(Loudness, [50.0, 150.0], 80.0)),
            ),
        ],
    )
    .with_phonetic("jīn")
}

fn mu() -> Character {
    Character::new(
        "mu",
        "木",
        Size::new(8.0, 12.0),
        vec![
            mid(
                &[[4.0, 0.0], [4.0, 12.0]],
                gate(Loudness, 30.0, lin(Loudness, [30.0, 150.0], 0.0)),
            ),
            seg(&[[0.5, 1.5], [4.0, 5.0]], lin(Centroid, [0.0, 6000.0], 110.0)),
            seg(&[[4.0, 5.0], [7.5, 1.5]], lin(Centroid, [0.0, 6000.0], 110.0)),
            seg(&[[4.0, 7.0], [0.5, 10.5]], lin(Centroid, [0.0, 6000.0], 110.0)),
            seg(&[[7.5, 10.5], [4.0, 7.0]], lin(Centroid, [0.0, 6000.0], 110.0)),
        ],
    )
    .with_phonetic("mù")
}

fn shui() -> Character {
    Character::new(
        "shui",
        "水",
        Size::new(6.0, 12.0),
        vec![
            seg(&[[0.0, 1.0], [0.0, 3.0]], lin(Centroid, [0.0, 6000.0], 0.0)),
            seg(&[[0.0, 8.0], [0.0, 10.0]], lin(Centroid, [0.0, 6000.0], 0.0)),
            seg(&[[6.0, 4.0], [6.0, 2.0]], lin(Centroid, [0.0, 6000.0], 0.0)),
            seg(&[[6.0, 11.0], [6.0, 9.0]], lin(Centroid, [0.0, 6000.0], 0.0)),
            poly(
                &[[3.6, 0.2], [2.2, 5.0], [3.8, 7.0], [2.4, 11.8]],
                gate(Loudness, 50.0, lin(Loudness, [50.0, 150.0], 90.0)),
            ),
        ],
    )
    .with_phonetic("shuǐ")
}

fn huo() -> Character {
    Character::new(
        "huo",
        "火",
        Size::new(12.0, 8.0),
        vec![
            poly(
                &[[0.5, 0.5], [3.0, 3.0], [6.0, 0.5], [9.0, 3.0], [11.5, 0.5]],
                gate(Loudness, 30.0, lin(Loudness, [30.0, 150.0], 80.0)),
            ),
            arc(&[[0.5, 0.0], [6.0, 7.5], [11.5, 0.0]], lin(Centroid, [0.0, 5000.0], 0.0)),
        ],
    )
    .with_phonetic("huǒ")
}

fn tu() -> Character {
    Character::new(
        "tu",
        "土",
        Size::new(12.0, 6.0),
        vec![
            seg(
                &[[0.0, 6.0], [12.0, 6.0]],
                gate(Loudness, 50.0, lin(Loudness, [50.0, 150.0], 120.0)),
            ),
            circle(&[[6.0, 3.0], [6.0, 0.5]], lin(Centroid, [0.0, 8000.0], 0.0)),
        ],
    )
    .with_phonetic("tǔ")
}

fn gong() -> Character {
    Character::new(
        "gong",
        "工",
        Size::new(8.0, 12.0),
        vec![
            seg(
                &[[8.0, 0.0], [0.0, 0.0]],
                gate(Loudness, 50.0, lin(Loudness, [50.0, 150.0], 150.0)),
            ),
            mid(&[[4.0, 0.0], [4.0, 6.2]], gate(Loudness, 50.0, lin(Loudness, [50.0, 150.0], 0.0))),
            circle(&[[4.0, 9.0], [4.0, 6.5]], lin(Centroid, [0.0, 8000.0], 80.0)),
        ],
    )
    .with_phonetic("gōng")
}

fn ri() -> Character {
    Character::new(
        "ri",
        "日",
        Size::new(12.0, 12.0),
        vec![
            circle(&[[6.0, 6.0], [6.0, 0.5]], lin(Centroid, [0.0, 8000.0], 0.0)),
            circle(&[[6.0, 6.0], [6.0, 6.1]], lin(Centroid, [0.0, 8000.0], 200.0)),
        ],
    )
    .with_phonetic("rì")
}

fn ban() -> Character {
    Character::new(
        "ban",
        "爿",
        Size::new(6.0, 12.0),
        vec![
            seg(&[[6.0, 12.0], [6.0, 0.0]], lin(Centroid, [0.0, 5000.0], 0.0)),
            seg(
                &[[0.0, 0.0], [0.0, 5.0]],
                gate(Loudness, 50.0, lin(Loudness, [50.0, 150.0], 120.0)),
            ),
            seg(&[[0.0, 5.0], [6.0, 5.0]], lin(Centroid, [0.0, 8000.0], 120.0)),
            seg(&[[0.0, 7.0], [0.0, 12.0]], lin(Centroid, [0.0, 8000.0], 120.0)),
            seg(
                &[[6.0, 7.0], [0.0, 7.0]],
                gate(Loudness, 50.0, lin(Loudness, [50.0, 150.0], 100.0)),
            ),
        ],
    )
    .with_phonetic("pán")
}

fn yan() -> Character {
    Character::new(
        "yan",
        "言",
        Size::new(6.0, 12.0),
        vec![
            mid(&[[0.0, 0.5], [6.0, 0.5]], lin(Centroid, [0.0, 8000.0], 60.0)),
            seg(&[[1.0, 1.0], [3.0, 3.0]], damped(0.1, 0.6)),
            seg(&[[3.0, 3.0], [5.0, 1.0]], damped(0.1, 0.6)),
            mid(&[[3.0, 1.5], [3.0, 8.0]], lin(Loudness, [0.0, 150.0], 150.0)),
            seg(&[[1.0, 4.0], [3.0, 6.0]], damped(0.1, 0.6)),
            seg(&[[3.0, 6.0], [5.0, 4.0]], damped(0.1, 0.6)),
            circle(&[[3.0, 9.5], [3.0, 7.5]], prod(2.0, 2.0, 8000.0, 4.0, 80.0)),
        ],
    )
    .with_phonetic("yán")
}

fn cao() -> Character {
    Character::new(
        "cao",
        "艹",
        Size::new(6.0, 12.0),
        vec![
            seg(&[[0.0, 5.0], [6.0, 5.0]], lin(Centroid, [0.0, 8000.0], 100.0)),
            seg(&[[0.0, 1.0], [0.0, 5.0]], prod(2.0, 1.2, 8000.0, 2.4, 100.0)),
            seg(&[[6.0, 5.0], [6.0, 1.0]], prod(2.0, 1.2, 8000.0, 2.4, 100.0)),
            mid(&[[3.0, 0.0], [3.0, 12.0]], prod(1.2, 3.0, 8000.0, 3.6, 0.0)),
        ],
    )
    .with_phonetic("cǎo")
}

fn shi() -> Character {
    Character::new(
        "shi",
        "石",
        Size::new(8.0, 12.0),
        vec![
            seg(&[[8.0, 0.0], [0.0, 0.0]], prod(3.0, 1.2, 8000.0, 3.6, 350.0)),
            seg(&[[0.0, 0.0], [0.0, 12.0]], prod(1.2, 3.0, 8000.0, 3.6, 200.0)),
            circle(&[[4.5, 5.0], [2.0, 5.0]], lin(Loudness, [0.0, 150.0], 0.0)),
        ],
    )
    .with_phonetic("shí")
}

fn mu2() -> Character {
    Character::new(
        "mu2",
        "目",
        Size::new(10.0, 6.0),
        vec![
            circle(&[[5.0, 3.0], [5.0, 3.1]], lin(Loudness, [0.0, 150.0], 80.0)),
            arc(&[[0.5, 3.2], [5.0, 0.5], [10.0, 3.2]], lin(Centroid, [0.0, 6000.0], 0.0)),
            arc(&[[0.5, 2.8], [5.0, 5.5], [10.0, 2.8]], lin(Centroid, [0.0, 6000.0], 0.0)),
        ],
    )
    .with_phonetic("mù")
}

fn yi() -> Character {
    Character::new(
        "yi",
        "衣",
        Size::new(7.0, 12.0),
        vec![
            mid(&[[3.5, 0.0], [3.5, 1.5]], lin(Loudness, [0.0, 150.0], 0.0)),
            seg(&[[3.5, 0.8], [-0.35, 4.65]], prod(2.0, 1.2, 8000.0, 2.4, 50.0)),
            seg(&[[7.35, 4.65], [3.5, 0.8]], prod(2.0, 1.2, 8000.0, 2.4, 50.0)),
            poly(
                &[[0.0, 7.5], [1.75, 5.75], [3.5, 7.5], [5.25, 5.75], [7.0, 7.5]],
                lin(Centroid, [0.0, 8000.0], 0.0),
            ),
            seg(&[[1.0, 6.0], [1.0, 12.0]], prod(1.1, 2.0, 8000.0, 2.2, 100.0)),
            seg(&[[1.0, 12.0], [5.0, 12.0]], prod(2.0, 1.1, 8000.0, 2.2, 100.0)),
        ],
    )
    .with_phonetic("yī")
}

fn kou() -> Character {
    Character::new(
        "kou",
        "口",
        Size::new(12.0, 9.0),
        vec![
            seg(
                &[[11.8, 2.5], [0.2, 2.5]],
                gate(Loudness, 30.0, lin(Loudness, [30.0, 150.0], 150.0)),
            ),
            arc(&[[1.2, 0.4], [6.0, 8.5], [10.8, 0.4]], lin(Centroid, [0.0, 8000.0], 0.0)),
        ],
    )
    .with_phonetic("kǒu")
}

fn chong() -> Character {
    Character::new(
        "chong",
        "虫",
        Size::new(5.0, 13.0),
        vec![
            circle(&[[2.5, 2.5], [2.5, 2.45]], lin(Centroid, [0.0, 6000.0], 100.0)),
            circle(
                &[[2.5, 2.5], [2.5, 0.5]],
                gate(Loudness, 60.0, lin(Loudness, [60.0, 180.0], 0.0)),
            ),
            poly(
                &[[2.5, 4.5], [2.0, 7.5], [3.0, 10.0], [2.5, 13.0]],
                lin(Centroid, [0.0, 8000.0], 50.0),
            ),
        ],
    )
    .with_phonetic("chóng")
}

fn fu() -> Character {
    Character::new(
        "fu",
        "阝",
        Size::new(5.0, 12.0),
        vec![
            seg(
                &[[5.0, 0.0], [0.0, 0.0]],
                gate(Loudness, 60.0, lin(Loudness, [60.0, 180.0], 100.0)),
            ),
            mid(&[[1.5, 0.5], [4.5, 3.5]], lin(Centroid, [0.0, 8000.0], 0.0)),
            seg(
                &[[5.0, 4.0], [0.0, 4.0]],
                gate(Loudness, 60.0, lin(Loudness, [60.0, 180.0], 100.0)),
            ),
            mid(&[[1.5, 4.5], [4.5, 7.5]], lin(Centroid, [0.0, 8000.0], 0.0)),
            seg(&[[5.0, 12.0], [5.0, 0.0]], prod(1.2, 1.2, 8000.0, 2.4, 150.0)),
        ],
    )
    .with_phonetic("fù")
}

fn xin() -> Character {
    Character::new(
        "xin",
        "心",
        Size::new(12.0, 10.0),
        vec![
            seg(&[[3.5, 0.0], [0.0, 3.5]], lin(Centroid, [0.0, 8000.0], 150.0)),
            seg(
                &[[5.5, 2.0], [3.5, 0.0]],
                gate(Loudness, 60.0, lin(Loudness, [60.0, 180.0], 100.0)),
            ),
            seg(&[[12.0, 3.5], [8.5, 0.0]], lin(Centroid, [0.0, 8000.0], 150.0)),
            seg(
                &[[8.5, 0.0], [6.5, 2.0]],
                gate(Loudness, 60.0, lin(Loudness, [60.0, 180.0], 100.0)),
            ),
            seg(&[[1.5, 5.5], [6.0, 10.0]], prod(1.2, 1.2, 6000.0, 2.4, 200.0)),
            seg(&[[6.0, 10.0], [10.5, 5.5]], prod(1.2, 1.2, 6000.0, 2.4, 200.0)),
            mid(&[[4.75, 4.75], [3.0, 6.5]], lin(Centroid, [0.0, 8000.0], 0.0)),
            mid(&[[7.25, 4.75], [9.0, 6.5]], lin(Centroid, [0.0, 8000.0], 0.0)),
        ],
    )
    .with_phonetic("xīn")
}

fn bao() -> Character {
    Character::new(
        "bao",
        "勹",
        Size::new(6.0, 13.0),
        vec![
            seg(&[[3.0, 0.0], [3.0, 3.0]], prod(1.2, 1.5, 8000.0, 2.4, 200.0)),
            seg(&[[3.0, 2.0], [0.0, 5.0]], prod(1.5, 1.2, 8000.0, 2.4, 200.0)),
            seg(&[[6.0, 5.0], [3.0, 2.0]], prod(1.0, 1.2, 8000.0, 2.4, 200.0)),
            seg(&[[0.0, 5.0], [2.7, 7.7]], prod(1.2, 1.0, 8000.0, 2.4, 200.0)),
            seg(&[[2.4, 7.0], [2.4, 13.0]], prod(1.2, 1.2, 8000.0, 2.4, 100.0)),
        ],
    )
    .with_phonetic("bāo")
}

fn yu() -> Character {
    Character::new(
        "yu",
        "雨",
        Size::new(8.0, 10.0),
        vec![
            seg(&[[8.0, 0.0], [0.0, 0.0]], prod(1.4, 1.4, 8000.0, 2.0, 200.0)),
            seg(&[[0.0, 0.0], [0.0, 5.0]], prod(1.1, 1.2, 8000.0, 1.21, 0.0)),
            seg(&[[8.0, 5.0], [8.0, 0.0]], prod(1.2, 1.1, 8000.0, 1.21, 0.0)),
            mid(&[[4.0, 0.0], [4.0, 5.0]], prod(1.2, 1.2, 8000.0, 1.44, 0.0)),
            seg(&[[0.0, 6.0], [0.0, 10.0]], prod(1.1, 1.2, 8000.0, 1.21, 0.0)),
            seg(&[[8.0, 10.0], [8.0, 6.0]], prod(1.2, 1.1, 8000.0, 1.21, 0.0)),
            mid(&[[4.0, 6.0], [4.0, 10.0]], prod(1.2, 1.2, 8000.0, 1.44, 0.0)),
        ],
    )
    .with_phonetic("yǔ")
}

fn jin2() -> Character {
    Character::new(
        "jin2",
        "斤",
        Size::new(8.0, 10.0),
        vec![
            seg(
                &[[8.0, 12.0], [8.0, 1.5]],
                prod(1.0, 1.2, 8000.0, 1.44, 100.0),
            )
            .with_cuts(CutAngles::new(90.0, 60.0)),
            mid(
                &[[1.0, 4.5], [8.0, 0.5]],
                prod(1.2, 1.2, 8000.0, 1.44, 0.0),
            )
            .with_cuts(CutAngles::new(90.0, -60.0)),
            poly(&[[2.0, 2.0], [1.0, 4.5], [3.5, 5.35]], prod(1.2, 1.0, 8000.0, 1.44, 100.0)),
        ],
    )
    .with_phonetic("jīn")
}

fn zu() -> Character {
    Character::new(
        "zu",
        "足",
        Size::new(8.0, 12.0),
        vec![
            circle(&[[4.0, 3.0], [4.0, 0.5]], prod(1.2, 1.2, 8000.0, 1.44, 100.0)),
            mid(&[[4.0, 6.5], [4.0, 12.0]], prod(1.1, 1.3, 8000.0, 1.44, 40.0)),
            seg(&[[0.0, 12.0], [8.0, 12.0]], prod(1.3, 1.1, 8000.0, 1.44, 40.0)),
            mid(&[[1.0, 7.0], [1.0, 9.0]], lin(Centroid, [1.0, 8000.0], 0.0)),
            arc(&[[3.5, 11.5], [1.0, 9.0]], lin(Centroid, [1.0, 8000.0], 0.0)),
            mid(&[[3.5, 9.5], [5.0, 9.5]], lin(Loudness, [1.0, 150.0], 0.0)),
            arc(&[[7.0, 7.5], [5.0, 9.5]], lin(Loudness, [1.0, 150.0], 0.0)),
        ],
    )
    .with_phonetic("zú")
}

fn chuo() -> Character {
    Character::new(
        "chuo",
        "辶",
        Size::new(10.0, 12.0),
        vec![
            mid(&[[5.0, 0.0], [5.0, 9.0]], lin(Centroid, [0.0, 8000.0], 0.0)),
            poly(&[[1.8, 11.8], [5.0, 9.0], [8.0, 11.8]], lin(Loudness, [0.0, 150.0], 60.0)),
            arc(&[[3.0, 3.5], [0.5, 1.0]], prod(1.2, 1.2, 8000.0, 1.44, 60.0)),
            arc(&[[7.0, 3.5], [9.5, 6.0]], prod(1.2, 1.2, 8000.0, 1.44, 60.0)),
            mid(&[[3.0, 3.5], [7.0, 3.5]], prod(1.2, 1.2, 8000.0, 1.44, 60.0)),
        ],
    )
    .with_phonetic("chuò")
}

fn mian() -> Character {
    Character::new(
        "mian",
        "宀",
        Size::new(10.0, 12.0),
        vec![
            seg(&[[5.0, 0.0], [0.0, 5.0]], lin(Centroid, [0.0, 8000.0], 60.0)),
            seg(&[[10.0, 5.0], [5.0, 0.0]], lin(Centroid, [0.0, 8000.0], 60.0)),
            seg(&[[1.5, 4.0], [1.5, 12.0]], lin(Loudness, [0.0, 150.0], 150.0)),
            seg(&[[8.5, 12.0], [8.5, 4.0]], lin(Loudness, [0.0, 150.0], 150.0)),
        ],
    )
    .with_phonetic("mián")
}

fn yang() -> Character {
    Character::new(
        "yang",
        "央",
        Size::new(7.0, 12.0),
        vec![
            seg(&[[0.0, 0.0], [0.0, 4.0]], lin(Centroid, [0.0, 8000.0], 100.0)),
            seg(&[[0.0, 4.0], [7.0, 4.0]], prod(1.2, 1.2, 8000.0, 1.44, 100.0)),
            seg(&[[7.0, 4.0], [7.0, 0.0]], lin(Centroid, [0.0, 8000.0], 100.0)),
            seg(&[[5.0, 0.5], [2.0, 0.5]], prod(1.2, 1.2, 8000.0, 1.44, 100.0)),
            mid(&[[3.5, 0.5], [3.5, 9.0]], prod(1.2, 1.2, 8000.0, 1.44, 0.0)),
            seg(&[[3.5, 8.0], [0.0, 11.5]], lin(Loudness, [0.0, 150.0], 100.0)),
            seg(&[[7.0, 11.5], [3.5, 8.0]], lin(Loudness, [0.0, 150.0], 100.0)),
            seg(&[[3.5, 4.5], [1.5, 6.5]], lin(Loudness, [0.0, 150.0], 0.0)),
            seg(&[[5.5, 6.5], [3.5, 4.5]], lin(Loudness, [0.0, 150.0], 0.0)),
        ],
    )
    .with_phonetic("yāng")
}

fn wei() -> Character {
    Character::new(
        "wei",
        "未",
        Size::new(6.0, 12.0),
        vec![
            seg(&[[0.0, 0.0], [0.0, 3.0]], lin(Loudness, [0.0, 150.0], 0.0)),
            seg(&[[0.0, 3.0], [3.0, 6.0]], lin(Loudness, [0.0, 150.0], 0.0)),
            seg(&[[6.0, 3.0], [6.0, 0.0]], lin(Loudness, [0.0, 150.0], 0.0)),
            seg(&[[3.0, 6.0], [6.0, 3.0]], lin(Loudness, [0.0, 150.0], 0.0)),
            mid(&[[3.0, 1.0], [3.0, 12.0]], prod(1.2, 1.2, 8000.0, 1.44, 100.0)),
            seg(&[[3.0, 7.0], [0.0, 10.0]], lin(Centroid, [0.0, 8000.0], 0.0)),
            seg(&[[6.0, 10.0], [3.0, 7.0]], lin(Centroid, [0.0, 8000.0], 0.0)),
        ],
    )
    .with_phonetic("wèi")
}

#[cfg(test)]
#[path = "../../tests/unit/character/builtin.rs"]
mod tests;
