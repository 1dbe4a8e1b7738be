//! Unit tests for cn-store.

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use cn_core::{Segment, SegmentId};

    use crate::loader::{parse_accessible, parse_distance};
    use crate::{StoreError, load_segments_reader, write_segments_csv};

    const ROUTES_CSV: &str = "\
id,start_location,end_location,distance_m,accessible
1,Main Gate,Library,100,true
2,Library,Cafeteria,50,True
3,Cafeteria,Gym,75.5,FALSE
4,Library,Old Annex,,true
5,Library,Attic,not-a-number,true
6,Gym,Pool,-4,true
7, ,Pool,10,true
";

    #[test]
    fn keeps_every_row() {
        let report = load_segments_reader(Cursor::new(ROUTES_CSV)).unwrap();
        assert_eq!(report.segments.len(), 7);
        assert_eq!(report.unusable, 4);
        assert_eq!(report.usable().count(), 3);

        let first = &report.segments[0];
        assert_eq!(first.id, Some(SegmentId(1)));
        assert_eq!(first.start, "Main Gate");
        assert_eq!(first.end, "Library");
        assert_eq!(first.distance_m, 100.0);
        assert!(first.accessible);

        assert!(report.segments[1].accessible, "\"True\" is accessible");
        assert!(!report.segments[2].accessible);
        assert_eq!(report.segments[2].distance_m, 75.5);
    }

    #[test]
    fn unparseable_distance_never_becomes_zero() {
        let report = load_segments_reader(Cursor::new(ROUTES_CSV)).unwrap();
        assert!(report.usable().all(|s| s.distance_m > 0.0));
        for end in ["Old Annex", "Attic", "Pool"] {
            let row = report.segments.iter().find(|s| s.end == end).unwrap();
            assert!(row.distance_m.is_nan(), "{end}");
            assert!(!row.is_usable());
        }
        assert!(!report.usable().any(|s| s.end == "Old Annex" || s.end == "Attic"));
    }

    #[test]
    fn unusable_rows_keep_their_fields() {
        let csv = "id,start_location,end_location,distance_m,accessible
2,Lib,Annex,,false
";
        let report = load_segments_reader(Cursor::new(csv)).unwrap();
        let row = &report.segments[0];
        assert_eq!(row.id, Some(SegmentId(2)));
        assert_eq!(row.start, "Lib");
        assert_eq!(row.end, "Annex");
        assert!(!row.accessible);
        assert_eq!(report.unusable, 1);
    }

    #[test]
    fn id_column_is_optional() {
        let csv = "start_location,end_location,distance_m,accessible\nA,B,5,true\n";
        let report = load_segments_reader(Cursor::new(csv)).unwrap();
        assert_eq!(report.segments, [Segment::new("A", "B", 5.0, true)]);
    }

    #[test]
    fn bad_id_is_dropped_not_fatal() {
        let csv = "id,start_location,end_location,distance_m,accessible\nx7,A,B,5,yes\n";
        let report = load_segments_reader(Cursor::new(csv)).unwrap();
        assert_eq!(report.segments[0].id, None);
        assert!(!report.segments[0].accessible, "only \"true\" counts");
    }

    #[test]
    fn missing_column_is_error() {
        let csv = "id,start_location,distance_m\n1,A,5\n";
        let err = load_segments_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, StoreError::Csv(_)));
    }

    #[test]
    fn header_only_is_empty() {
        let csv = "id,start_location,end_location,distance_m,accessible\n";
        let report = load_segments_reader(Cursor::new(csv)).unwrap();
        assert!(report.segments.is_empty());
        assert_eq!(report.unusable, 0);
    }

    #[test]
    fn field_parsers() {
        assert_eq!(parse_distance(" 12.5 "), Some(12.5));
        assert_eq!(parse_distance("0"), Some(0.0));
        assert_eq!(parse_distance(""), None);
        assert_eq!(parse_distance("NaN"), None);
        assert_eq!(parse_distance("inf"), None);
        assert_eq!(parse_distance("-1"), None);

        assert!(parse_accessible("TRUE"));
        assert!(parse_accessible(" true "));
        assert!(!parse_accessible("1"));
        assert!(!parse_accessible(""));
    }

    #[test]
    fn written_table_loads_back() {
        let segments = vec![
            Segment::new("Gate", "Lib", 100.0, true).with_id(SegmentId(1)),
            Segment::new("Lib", "Cafe", 50.0, false),
        ];
        let mut buf = Vec::new();
        write_segments_csv(&mut buf, &segments).unwrap();

        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("id,start_location,end_location,distance_m,accessible\n"));

        let report = load_segments_reader(buf.as_slice()).unwrap();
        assert_eq!(report.segments, segments);
    }

    #[test]
    fn empty_table_still_has_header() {
        let mut buf = Vec::new();
        write_segments_csv(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "id,start_location,end_location,distance_m,accessible\n");
    }
}

#[cfg(test)]
mod stores {
    use std::fs;

    use cn_core::{Segment, SegmentId};

    use crate::{CsvSegmentStore, MemorySegmentStore, SegmentStore};

    #[test]
    fn memory_store_assigns_ids() {
        let mut store = MemorySegmentStore::new();
        let a = store.insert(Segment::new("A", "B", 1.0, true));
        let b = store.insert(Segment::new("B", "C", 2.0, true));
        assert_eq!(a, SegmentId(1));
        assert_eq!(b, SegmentId(2));

        let c = store.insert(Segment::new("C", "D", 3.0, true).with_id(SegmentId(10)));
        assert_eq!(c, SegmentId(10));
        assert_eq!(store.insert(Segment::new("D", "E", 1.0, true)), SegmentId(11));
    }

    #[test]
    fn memory_store_mutations_bump_revision() {
        let mut store = MemorySegmentStore::new();
        let r0 = store.snapshot().unwrap().revision();

        let id = store.insert(Segment::new("A", "B", 1.0, true));
        let r1 = store.snapshot().unwrap().revision();
        assert!(r1 > r0);

        assert!(store.update(id, Segment::new("A", "B", 9.0, false)));
        let snap = store.snapshot().unwrap();
        assert!(snap.revision() > r1);
        assert_eq!(snap.segments()[0].distance_m, 9.0);
        assert_eq!(snap.segments()[0].id, Some(id));

        let before = store.revision();
        assert!(!store.update(SegmentId(99), Segment::new("X", "Y", 1.0, true)));
        assert!(store.remove(SegmentId(99)).is_none());
        assert_eq!(store.revision(), before, "failed mutations leave the revision alone");

        assert!(store.remove(id).is_some());
        assert!(store.segments().is_empty());
        assert!(store.revision() > before);

        let before = store.revision();
        store.replace_all(vec![Segment::new("P", "Q", 1.0, true)]);
        assert!(store.revision() > before);
    }

    #[test]
    fn snapshot_is_isolated_from_later_edits() {
        let mut store = MemorySegmentStore::from_segments(vec![Segment::new("A", "B", 1.0, true)]);
        let snap = store.snapshot().unwrap();
        store.replace_all(Vec::new());
        assert_eq!(snap.len(), 1);
    }

    #[test]
    fn csv_store_revision_tracks_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.csv");
        fs::write(&path, "id,start_location,end_location,distance_m,accessible\n1,A,B,5,true\n").unwrap();

        let store = CsvSegmentStore::new(&path);
        let first = store.snapshot().unwrap();
        let again = store.snapshot().unwrap();
        assert_eq!(first.revision(), again.revision());
        assert_eq!(first.segments(), [Segment::new("A", "B", 5.0, true).with_id(SegmentId(1))]);

        fs::write(&path, "id,start_location,end_location,distance_m,accessible\n1,A,B,6,true\n").unwrap();
        let edited = store.snapshot().unwrap();
        assert_ne!(edited.revision(), first.revision());
        assert_eq!(edited.segments()[0].distance_m, 6.0);
    }

    #[test]
    fn csv_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvSegmentStore::new(dir.path().join("absent.csv"));
        let snap = store.snapshot().unwrap();
        assert!(snap.is_empty());
    }
}

#[cfg(test)]
mod stats {
    use cn_core::{Location, Segment};

    use crate::{RouteStats, location_directory};

    #[test]
    fn aggregates() {
        let segments = [
            Segment::new("Gate", "Lib", 100.0, true),
            Segment::new("Lib", "Cafe", 50.0, false),
            Segment::new("Cafe", "Gym", 150.0, true),
        ];
        let s = RouteStats::from_segments(&segments);
        assert_eq!(s.total_routes, 3);
        assert_eq!(s.accessible_routes, 2);
        assert_eq!(s.total_distance_m, 300.0);
        assert_eq!(s.average_distance_m, 100.0);
    }

    #[test]
    fn empty_table() {
        let s = RouteStats::from_segments(&[]);
        assert_eq!(s, RouteStats::default());
        assert!(s.to_string().contains("Total Routes:      0"));
    }

    #[test]
    fn unusable_rows_count_as_routes() {
        let csv = "id,start_location,end_location,distance_m,accessible\n\
                   1,Gate,Lib,100,true\n\
                   2,Lib,Annex,,false\n";
        let report = crate::load_segments_reader(csv.as_bytes()).unwrap();

        let s = RouteStats::from_segments(&report.segments);
        assert_eq!(s.total_routes, 2);
        assert_eq!(s.accessible_routes, 1);
        assert_eq!(s.total_distance_m, 100.0);
        assert_eq!(s.average_distance_m, 100.0);

        // Annex has no usable segment but is still a choosable location.
        assert_eq!(location_directory(&report.segments), ["Annex", "Gate", "Lib"].map(Location::from));
    }

    #[test]
    fn directory_sorted_and_unique() {
        let segments = [
            Segment::new("Lib", "Cafe", 50.0, true),
            Segment::new("Gate", "Lib", 100.0, true),
            Segment::new("Cafe", "Cafe", 0.0, true),
        ];
        assert_eq!(location_directory(&segments), ["Cafe", "Gate", "Lib"].map(Location::from));
    }
}
