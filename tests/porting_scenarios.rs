use indoc::indoc;
use porttrack::indexer::TestIndex;
use porttrack::{
    diff, index, map_module_path, IndexerConfig, MappingRules, ModulePath, ScanPatterns,
};
use pretty_assertions::assert_eq;

const INDOOR_BUILDER_TESTS: &str = indoc! {r#"
    import pytest


    def test_module_level_smoke():
        """Runs before any class."""


    class TestIndoorMapBuilder:
        def test_place_room(self, builder, qtbot):
            """Placing a room adds it to the map.

            Longer description that is not part of the summary.
            """
            builder.place()

        def test_rotate_room(self, builder):
            '''Rotation snaps to 15 degrees.'''

        def helper(self):
            pass


    class TestUndoRedo:
        @pytest.mark.parametrize("steps", [1, 2])
        def test_undo_place(self, builder, steps):
            builder.undo()

        async def test_async_save(self, tmp_path) -> None:
            """Saves without blocking."""

        def test_place_room(self, builder):
            pass
"#};

const INDOOR_BUILDER_PORT: &str = indoc! {r#"
    public class IndoorBuilderTests
    {
        // Original: def test_place_room(self, builder, qtbot):
        [Fact]
        public void PlaceRoom() { }

        // Original: def test_undo_place(self, builder, steps):
        [Theory]
        public void UndoPlace(int steps) { }

        // Original: def test_removed_feature(self):
        [Fact]
        public void RemovedFeature() { }
    }
"#};

fn names(entries: &[porttrack::TestEntry]) -> Vec<String> {
    entries.iter().map(|e| e.qualified_name()).collect()
}

#[test]
fn test_scenario_single_class_single_function() {
    let source = format!("class TestFoo:\n{}\n    def test_bar(self):\n", "#".repeat(24));
    let entries = index(&source);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].class_name, "TestFoo");
    assert_eq!(entries[0].name, "test_bar");
    assert_eq!(entries[0].params, "self");
    assert_eq!(entries[0].doc, "");
    assert_eq!(entries[0].offset, 40);
    assert_eq!(entries[0].line, 3);
}

#[test]
fn test_indexes_realistic_test_file() {
    let entries = index(INDOOR_BUILDER_TESTS);

    assert_eq!(
        names(&entries),
        [
            "Unknown::test_module_level_smoke",
            "TestIndoorMapBuilder::test_place_room",
            "TestIndoorMapBuilder::test_rotate_room",
            "TestUndoRedo::test_undo_place",
            "TestUndoRedo::test_async_save",
            "TestUndoRedo::test_place_room",
        ]
    );
    assert_eq!(entries[1].params, "self, builder, qtbot");
    assert_eq!(entries[1].doc, "Placing a room adds it to the map.");
    assert_eq!(entries[2].doc, "Rotation snaps to 15 degrees.");
    assert_eq!(entries[4].doc, "Saves without blocking.");
    assert_eq!(entries[3].doc, "");
}

#[test]
fn test_index_groups_and_duplicates() {
    let patterns = ScanPatterns::new(&IndexerConfig::default()).unwrap();
    let index = TestIndex::build(INDOOR_BUILDER_TESTS, &patterns);

    let groups: Vec<_> = index
        .by_class()
        .into_iter()
        .map(|(class, entries)| (class, entries.len()))
        .collect();
    assert_eq!(
        groups,
        [("Unknown", 1), ("TestIndoorMapBuilder", 2), ("TestUndoRedo", 3)]
    );
    assert_eq!(index.duplicate_names(), ["test_place_room"]);
}

#[test]
fn test_diff_against_ported_file() {
    let entries = index(INDOOR_BUILDER_TESTS);
    let result = diff(&entries, INDOOR_BUILDER_PORT);

    assert_eq!(result.total, 6);
    assert_eq!(result.ported, 3);
    assert_eq!(result.matched, 3);

    let missing: Vec<_> = result
        .missing
        .iter()
        .map(|m| (m.name.as_str(), m.doc.as_str()))
        .collect();
    assert_eq!(
        missing,
        [
            ("test_module_level_smoke", "Runs before any class."),
            ("test_rotate_room", "Rotation snaps to 15 degrees."),
            ("test_async_save", "Saves without blocking."),
        ]
    );
    assert_eq!(result.stale_markers, ["test_removed_feature"]);
    assert_eq!(result.completion_percent(), 50.0);
}

#[test]
fn test_mapping_scenarios() {
    let rules = MappingRules::default();
    let map = |dotted: &str| map_module_path(&ModulePath::parse_dotted(dotted), &rules).to_string();

    assert_eq!(map("resource.formats.gff"), "Formats.GFF");
    assert_eq!(map("utility.io.stream"), "Utility.io.stream");
    assert_eq!(map("pykotor.resource.formats.tpc.io_tpc"), "Formats.TPC.io_tpc");
    assert_eq!(map("pykotor.common.module"), "Common.Module");
    assert_eq!(map("pykotor.tools.kit_generator"), "Tools.Kit_Generator");
}
