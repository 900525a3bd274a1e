//! End-to-end editing sessions on the layout model.

use crate::helpers::{TestLayoutBuilder, assert_item_count, child_tag_count};
use gridsmith::layout::GridLayout;
use gridsmith::types::{ConfigField, GridConfig, ItemPatch, parse_config_value};

#[test]
fn test_add_twice_then_remove_first() {
    let mut layout = GridLayout::default();
    let first = layout.add_item();
    let second = layout.add_item();

    assert!(layout.remove_item(first));
    assert_item_count(&layout, 1);
    assert_eq!(layout.items()[0].id, second);

    let markup = layout.render_markup();
    assert_eq!(child_tag_count(&markup), 1);
    assert!(markup.contains("col-start-1 col-span-1 row-start-1 row-span-1"));
}

#[test]
fn test_empty_configured_grid_has_no_children() {
    let mut layout = GridLayout::default();
    layout.set_config(GridConfig::new(3, 2, 4));

    let markup = layout.render_markup();
    assert_eq!(child_tag_count(&markup), 0);
    assert!(markup.starts_with("<div class=\"grid grid-cols-3 grid-rows-2 gap-4\">"));
}

#[test]
fn test_ids_are_never_reused_after_removal() {
    let mut layout = TestLayoutBuilder::new().with_n_items(3).build();

    assert!(layout.remove_item(3));
    let next = layout.add_item();

    assert_eq!(next, 4);
    assert_item_count(&layout, 3);
}

#[test]
fn test_config_inputs_drive_markup() {
    let mut layout = TestLayoutBuilder::new().with_item_at(2, 2, 2, 1).build();

    for (field, text) in [
        (ConfigField::Columns, "6"),
        (ConfigField::Rows, " 4 "),
        (ConfigField::Gap, "abc"),
    ] {
        if let Some(value) = parse_config_value(text) {
            layout.set_config_field(field, value);
        }
    }

    assert_eq!(*layout.config(), GridConfig::new(6, 4, 4));
    insta::assert_snapshot!(layout.render_markup(), @r#"
    <div class="grid grid-cols-6 grid-rows-4 gap-4">
      <div class="col-start-2 col-span-2 row-start-2 row-span-1"></div>
    </div>
    "#);
}

#[test]
fn test_shrinking_grid_keeps_out_of_range_items() {
    let mut layout = TestLayoutBuilder::new()
        .with_config(6, 6, 2)
        .with_item_at(5, 5, 2, 2)
        .build();

    layout.set_config_field(ConfigField::Columns, 2);
    layout.set_config_field(ConfigField::Rows, 2);

    let item = layout.get_item(1).unwrap();
    assert_eq!((item.x, item.y, item.w, item.h), (5, 5, 2, 2));
    assert!(!item.fits_within(layout.config()));
    assert!(layout.render_markup().contains("col-start-5 col-span-2 row-start-5 row-span-2"));
}

#[test]
fn test_updates_to_removed_item_are_ignored() {
    let mut layout = TestLayoutBuilder::new().with_n_items(2).build();
    let before = layout.clone();

    layout.remove_item(1);
    assert!(!layout.update_item(1, ItemPatch::position(3, 3)));
    assert_eq!(layout.items(), &before.items()[1..]);
}
