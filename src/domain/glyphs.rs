use std::collections::HashMap;

use serde::Deserialize;

use super::outline::Outline;

/// Glyph outlines arrive in asset coordinates a touch too large for the
/// scene; every loaded outline is scaled by this factor.
pub const GLYPH_SCALE: f32 = 0.85;

#[derive(Deserialize)]
struct BundleRoot {
    assets: Vec<BundleAsset>,
}

#[derive(Deserialize)]
struct BundleAsset {
    /// Source asset path, e.g. `/svgs/D.svg`. The file stem is the letter.
    path: String,
    /// Closed polygon loops in local coordinates.
    loops: Vec<Vec<[f32; 2]>>,
}

/// Letter -> outline registry loaded from the asset pipeline's JSON bundle.
#[derive(Clone, Debug, Default)]
pub struct GlyphLibrary {
    by_letter: HashMap<char, Outline>,
}

impl GlyphLibrary {
    /// Parse a glyph bundle. A malformed asset path is fatal for the whole
    /// load: a glyph that silently lost its letter association would corrupt
    /// every word spawned from it.
    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;

        let mut by_letter = HashMap::new();
        for asset in bundle.assets {
            let letter = letter_for_asset(&asset.path)?;
            let outline = Outline::from_loops(asset.loops).scaled(GLYPH_SCALE);
            // Last write wins when a bundle repeats a letter.
            by_letter.insert(letter, outline);
        }

        Ok(Self { by_letter })
    }

    pub fn len(&self) -> usize {
        self.by_letter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_letter.is_empty()
    }

    pub fn outline(&self, letter: char) -> Option<&Outline> {
        self.by_letter.get(&letter)
    }

    /// Resolve a word to one outline per letter, in order. Any unmapped
    /// letter fails the whole word.
    pub fn outlines_for_word(&self, word: &str) -> Result<Vec<(char, Outline)>, String> {
        word.chars()
            .map(|letter| {
                self.by_letter
                    .get(&letter)
                    .map(|o| (letter, o.clone()))
                    .ok_or_else(|| format!("no glyph loaded for letter '{letter}'"))
            })
            .collect()
    }
}

/// Extract the identifying letter from an asset path: the final path segment
/// must be a single ASCII uppercase letter followed by a dot-separated
/// extension, e.g. `D.svg`.
fn letter_for_asset(path: &str) -> Result<char, String> {
    let name = path.rsplit('/').next().unwrap_or("");
    let err = || format!("asset path '{path}' does not name a glyph letter");

    let (stem, ext) = name.split_once('.').ok_or_else(err)?;
    if ext.is_empty() {
        return Err(err());
    }

    let mut chars = stem.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => Ok(c),
        _ => Err(err()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(assets: &str) -> String {
        format!("{{\"assets\":[{assets}]}}")
    }

    const TRIANGLE: &str = "\"loops\":[[[0.0,0.0],[100.0,0.0],[100.0,100.0]]]";

    #[test]
    fn loads_letters_and_applies_scale() {
        let json = bundle(&format!("{{\"path\":\"/svgs/D.svg\",{TRIANGLE}}}"));
        let lib = GlyphLibrary::from_bundle_json(&json).unwrap();

        assert_eq!(lib.len(), 1);
        let outline = lib.outline('D').unwrap();
        assert_eq!(outline.half_extents().x, 42.5);
    }

    #[test]
    fn bad_asset_path_fails_the_whole_load() {
        let json = bundle(&format!(
            "{{\"path\":\"/svgs/D.svg\",{TRIANGLE}}},{{\"path\":\"/svgs/logo.svg\",{TRIANGLE}}}"
        ));
        let err = GlyphLibrary::from_bundle_json(&json).unwrap_err();
        assert!(err.contains("logo.svg"));
    }

    #[test]
    fn word_resolution_reports_missing_letters() {
        let json = bundle(&format!("{{\"path\":\"/svgs/O.svg\",{TRIANGLE}}}"));
        let lib = GlyphLibrary::from_bundle_json(&json).unwrap();

        assert_eq!(lib.outlines_for_word("OO").unwrap().len(), 2);
        assert!(lib.outlines_for_word("OX").is_err());
    }

    #[test]
    fn letter_extraction_accepts_only_single_uppercase_stems() {
        assert_eq!(letter_for_asset("/svgs/P.svg").unwrap(), 'P');
        assert!(letter_for_asset("/svgs/p.svg").is_err());
        assert!(letter_for_asset("/svgs/AB.svg").is_err());
        assert!(letter_for_asset("").is_err());
    }

    #[test]
    fn letter_extraction_requires_an_extension() {
        assert!(letter_for_asset("/svgs/D").is_err());
        assert!(letter_for_asset("/svgs/D.").is_err());
        assert_eq!(letter_for_asset("D.svg").unwrap(), 'D');
    }

    #[test]
    fn repeated_letter_last_write_wins() {
        let json = bundle(&format!(
            "{{\"path\":\"/svgs/E.svg\",{TRIANGLE}}},{{\"path\":\"/svgs/E.svg\",\"loops\":[[[0.0,0.0],[10.0,0.0],[10.0,10.0]]]}}"
        ));
        let lib = GlyphLibrary::from_bundle_json(&json).unwrap();
        assert_eq!(lib.len(), 1);
        assert_eq!(lib.outline('E').unwrap().half_extents().x, 4.25);
    }
}
