use super::model::{BlurAreas, BlurZone, ZoneMetadata};
use super::paths::normalize_image_path;

/// Merges an incoming partial blur-area update into the previously stored map.
///
/// An absent or empty update returns the existing map unchanged: a partial
/// gallery edit that carries no blur data must never erase recorded zones.
///
/// Otherwise the result is the union of normalized keys, incoming wins on
/// conflict. Incoming zones replace (not extend) the prior zones for their key
/// and get fresh `_metadata` stamped with `now` plus the raw/normalized path
/// pair. Entries with an empty normalized key or an empty zone list are
/// dropped. Existing entries are re-normalized on the way through.
///
/// `now` is an RFC 3339 timestamp; the caller stamps one per sanitize pass so
/// zone metadata and `updated_at` agree.
pub fn merge_blur_areas(
    existing: &BlurAreas,
    incoming: Option<&BlurAreas>,
    now: &str,
) -> BlurAreas {
    let incoming = match incoming {
        Some(map) if !map.is_empty() => map,
        _ => return existing.clone(),
    };

    let mut merged = BlurAreas::new();

    for (raw_key, zones) in incoming {
        let key = normalize_image_path(raw_key);
        if key.is_empty() || zones.is_empty() {
            continue;
        }
        let stamped: Vec<BlurZone> = zones
            .iter()
            .map(|zone| BlurZone {
                metadata: Some(ZoneMetadata {
                    timestamp: now.to_string(),
                    original_path: raw_key.clone(),
                    normalized_path: key.clone(),
                }),
                ..zone.clone()
            })
            .collect();
        // Duplicate raw keys that normalize alike: BTreeMap iteration is
        // lexicographic over raw keys, so the last raw form wins.
        merged.insert(key, stamped);
    }

    for (raw_key, zones) in existing {
        let key = normalize_image_path(raw_key);
        if key.is_empty() || zones.is_empty() {
            continue;
        }
        merged.entry(key).or_insert_with(|| zones.clone());
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: &str = "2026-08-24T12:00:00+00:00";

    fn zone(x: i32, blur_amount: u32) -> BlurZone {
        BlurZone {
            x,
            y: 0,
            width: 10,
            height: 10,
            blur_amount,
            metadata: None,
        }
    }

    fn areas(entries: &[(&str, Vec<BlurZone>)]) -> BlurAreas {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn absent_incoming_returns_existing_unchanged() {
        let existing = areas(&[("/images/a.jpg", vec![zone(0, 5)])]);
        assert_eq!(merge_blur_areas(&existing, None, NOW), existing);
    }

    #[test]
    fn empty_incoming_returns_existing_unchanged() {
        let existing = areas(&[("/images/a.jpg", vec![zone(0, 5)])]);
        let empty = BlurAreas::new();
        assert_eq!(merge_blur_areas(&existing, Some(&empty), NOW), existing);
    }

    #[test]
    fn incoming_replaces_zones_for_its_key() {
        let existing = areas(&[("/images/a.jpg", vec![zone(0, 5)])]);
        let incoming = areas(&[("/images/a.jpg", vec![zone(50, 8)])]);

        let merged = merge_blur_areas(&existing, Some(&incoming), NOW);
        let zones = &merged["/images/a.jpg"];
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].x, 50);
        assert_eq!(zones[0].blur_amount, 8);
    }

    #[test]
    fn untouched_existing_keys_are_preserved() {
        let existing = areas(&[
            ("/images/a.jpg", vec![zone(0, 5)]),
            ("/images/b.jpg", vec![zone(1, 3)]),
        ]);
        let incoming = areas(&[("/images/a.jpg", vec![zone(9, 9)])]);

        let merged = merge_blur_areas(&existing, Some(&incoming), NOW);
        assert_eq!(merged["/images/b.jpg"], existing["/images/b.jpg"]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn raw_key_variants_collapse_to_one_normalized_entry() {
        let existing = areas(&[("/images/a.jpg", vec![zone(0, 5)])]);
        let incoming = areas(&[("images/a.jpg?v=2", vec![zone(7, 2)])]);

        let merged = merge_blur_areas(&existing, Some(&incoming), NOW);
        assert_eq!(merged.len(), 1);
        let zones = &merged["/images/a.jpg"];
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].x, 7);
    }

    #[test]
    fn incoming_zones_get_fresh_metadata() {
        let incoming = areas(&[("images/a.jpg?v=2", vec![zone(0, 5)])]);

        let merged = merge_blur_areas(&BlurAreas::new(), Some(&incoming), NOW);
        let meta = merged["/images/a.jpg"][0].metadata.as_ref().unwrap();
        assert_eq!(meta.timestamp, NOW);
        assert_eq!(meta.original_path, "images/a.jpg?v=2");
        assert_eq!(meta.normalized_path, "/images/a.jpg");
    }

    #[test]
    fn empty_keys_and_empty_zone_lists_are_dropped() {
        let existing = areas(&[("/images/keep.jpg", vec![zone(0, 5)]), ("/gone.jpg", vec![])]);
        let incoming = areas(&[
            ("?v=2", vec![zone(1, 1)]),
            ("/images/empty.jpg", vec![]),
            ("/images/new.jpg", vec![zone(2, 2)]),
        ]);

        let merged = merge_blur_areas(&existing, Some(&incoming), NOW);
        assert_eq!(merged.len(), 2);
        assert!(merged.contains_key("/images/keep.jpg"));
        assert!(merged.contains_key("/images/new.jpg"));
    }

    #[test]
    fn duplicate_raw_keys_resolve_to_lexicographically_last() {
        // Both raw forms normalize to /images/a.jpg; "images/a.jpg?v=2" sorts
        // after "/images/a.jpg", so its zones win.
        let incoming = areas(&[
            ("/images/a.jpg", vec![zone(1, 1)]),
            ("images/a.jpg?v=2", vec![zone(2, 2)]),
        ]);

        let merged = merge_blur_areas(&BlurAreas::new(), Some(&incoming), NOW);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged["/images/a.jpg"][0].x, 2);
    }
}
