//! Pure display formatting for catalog records.
//!
//! Every function here is total: unknown type, stat, or ability names
//! fall back to a best-effort default instead of failing. Labels are
//! Japanese, matching the audience of the catalog page.

use pokedex_types::{Pokemon, PokemonId};

/// Color used for types without an entry in [`TYPE_COLORS`].
pub const DEFAULT_TYPE_COLOR: &str = "#777777";

/// Maximum used for stats without an entry in [`STAT_MAXIMUMS`].
pub const DEFAULT_STAT_MAX: u32 = 255;

/// Type name to Japanese label.
const TYPE_LABELS: [(&str, &str); 18] = [
    ("normal", "ノーマル"),
    ("fire", "ほのお"),
    ("water", "みず"),
    ("electric", "でんき"),
    ("grass", "くさ"),
    ("ice", "こおり"),
    ("fighting", "かくとう"),
    ("poison", "どく"),
    ("ground", "じめん"),
    ("flying", "ひこう"),
    ("psychic", "エスパー"),
    ("bug", "むし"),
    ("rock", "いわ"),
    ("ghost", "ゴースト"),
    ("dragon", "ドラゴン"),
    ("dark", "あく"),
    ("steel", "はがね"),
    ("fairy", "フェアリー"),
];

/// Type name to badge color.
const TYPE_COLORS: [(&str, &str); 18] = [
    ("normal", "#A8A878"),
    ("fire", "#F08030"),
    ("water", "#6890F0"),
    ("electric", "#F8D030"),
    ("grass", "#78C850"),
    ("ice", "#98D8D8"),
    ("fighting", "#C03028"),
    ("poison", "#A040A0"),
    ("ground", "#E0C068"),
    ("flying", "#A890F0"),
    ("psychic", "#F85888"),
    ("bug", "#A8B820"),
    ("rock", "#B8A038"),
    ("ghost", "#705898"),
    ("dragon", "#7038F8"),
    ("dark", "#705848"),
    ("steel", "#B8B8D0"),
    ("fairy", "#EE99AC"),
];

/// Stat name to Japanese label.
const STAT_LABELS: [(&str, &str); 6] = [
    ("hp", "HP"),
    ("attack", "攻撃"),
    ("defense", "防御"),
    ("special-attack", "特攻"),
    ("special-defense", "特防"),
    ("speed", "素早さ"),
];

/// Stat name to the highest base value any record has for it.
const STAT_MAXIMUMS: [(&str, u32); 6] = [
    ("hp", 255),
    ("attack", 190),
    ("defense", 230),
    ("special-attack", 194),
    ("special-defense", 230),
    ("speed", 200),
];

/// Ability name to Japanese label.
const ABILITY_LABELS: [(&str, &str); 50] = [
    ("static", "せいでんき"),
    ("lightning-rod", "ひらいしん"),
    ("compound-eyes", "ふくがん"),
    ("swarm", "むしのしらせ"),
    ("keen-eye", "するどいめ"),
    ("hyper-cutter", "かいりきバサミ"),
    ("pickup", "ものひろい"),
    ("truant", "なまけ"),
    ("hustle", "はりきり"),
    ("pressure", "プレッシャー"),
    ("limber", "じゅうなん"),
    ("sand-veil", "すながくれ"),
    ("volt-absorb", "ちくでん"),
    ("water-absorb", "ちょすい"),
    ("oblivious", "どんかん"),
    ("cloud-nine", "エアロック"),
    ("insomnia", "ふみん"),
    ("color-change", "へんしょく"),
    ("immunity", "めんえき"),
    ("flash-fire", "もらいび"),
    ("shield-dust", "りんぷん"),
    ("own-tempo", "マイペース"),
    ("suction-cups", "きゅうばん"),
    ("intimidate", "いかく"),
    ("shadow-tag", "かげふみ"),
    ("rough-skin", "さめはだ"),
    ("wonder-guard", "ふしぎなまもり"),
    ("levitate", "ふゆう"),
    ("effect-spore", "ほうし"),
    ("synchronize", "シンクロ"),
    ("clear-body", "クリアボディ"),
    ("natural-cure", "しぜんかいふく"),
    ("serene-grace", "てんのめぐみ"),
    ("swift-swim", "すいすい"),
    ("chlorophyll", "ようりょくそ"),
    ("illuminate", "はっこう"),
    ("trace", "トレース"),
    ("huge-power", "ちからもち"),
    ("poison-point", "どくのトゲ"),
    ("inner-focus", "せいしんりょく"),
    ("magma-armor", "マグマのよろい"),
    ("water-veil", "みずのベール"),
    ("magnet-pull", "じりょく"),
    ("soundproof", "ぼうおん"),
    ("rain-dish", "あめうけざら"),
    ("sand-stream", "すなおこし"),
    ("thick-fat", "あついしぼう"),
    ("early-bird", "はやおき"),
    ("flame-body", "ほのおのからだ"),
    ("run-away", "にげあし"),
];

/// Case-insensitive table lookup.
fn lookup<'t, V: Copy>(table: &'t [(&'t str, V)], key: &str) -> Option<V> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|&(_, value)| value)
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Format an id as `#` followed by at least three zero-padded digits.
///
/// `25` becomes `#025`; ids wider than three digits are not truncated.
pub fn format_id(id: PokemonId) -> String {
    format!("#{:03}", id.into_inner())
}

/// Uppercase the first character of a raw name.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Localized label for a type, or the name itself if none exists.
pub fn type_label(name: &str) -> &str {
    lookup(&TYPE_LABELS, name).unwrap_or(name)
}

/// Badge color for a type, or [`DEFAULT_TYPE_COLOR`].
pub fn type_color(name: &str) -> &'static str {
    lookup(&TYPE_COLORS, name).unwrap_or(DEFAULT_TYPE_COLOR)
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Base value of a stat on a record, 0 when the record lacks it.
pub fn stat_value(record: &Pokemon, stat: &str) -> u32 {
    record.stat(stat).unwrap_or(0)
}

/// Localized label for a stat, or the name itself.
pub fn stat_label(stat: &str) -> &str {
    lookup(&STAT_LABELS, stat).unwrap_or(stat)
}

/// Highest known base value for a stat, [`DEFAULT_STAT_MAX`] otherwise.
pub fn stat_max(stat: &str) -> u32 {
    lookup(&STAT_MAXIMUMS, stat).unwrap_or(DEFAULT_STAT_MAX)
}

/// A record's stat as a percentage of the stat's maximum.
///
/// Not clamped: a value above the table maximum yields more than 100.
pub fn stat_percentage(record: &Pokemon, stat: &str) -> f64 {
    f64::from(stat_value(record, stat)) / f64::from(stat_max(stat)) * 100.0
}

// ---------------------------------------------------------------------------
// Measurements and abilities
// ---------------------------------------------------------------------------

/// Height in decimetres as metres with one decimal (`4` -> `0.4m`).
pub fn format_height(height: u32) -> String {
    format!("{:.1}m", f64::from(height) / 10.0)
}

/// Weight in hectograms as kilograms with one decimal (`60` -> `6.0kg`).
pub fn format_weight(weight: u32) -> String {
    format!("{:.1}kg", f64::from(weight) / 10.0)
}

/// Localized label for an ability, or the name itself.
pub fn ability_label(name: &str) -> &str {
    lookup(&ABILITY_LABELS, name).unwrap_or(name)
}

/// Best image for a card: official artwork, then the front sprite.
pub fn artwork_url(record: &Pokemon) -> Option<&str> {
    record
        .sprites
        .other
        .official_artwork
        .front_default
        .as_deref()
        .filter(|url| !url.is_empty())
        .or_else(|| record.sprites.front_default.as_deref())
}
