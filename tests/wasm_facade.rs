//! Facade checks that only mean something inside a wasm runtime:
//! clock seeding and reading the SoA buffers back through wasm memory.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use plantula_engine::{tool_bucket, World};

#[wasm_bindgen_test]
fn clock_seeded_world_is_usable() {
    plantula_engine::init();

    let mut world = World::auto();
    assert_eq!(world.width(), 10);

    assert!(world.select_tool(tool_bucket()));
    let before = world.kind_at(4, 4);
    assert!(world.click_cell(4, 4));
    assert_ne!(world.kind_at(4, 4), before);
}

#[wasm_bindgen_test]
fn colors_buffer_is_readable_through_wasm_memory() {
    let world = World::new(3);
    let layout = world.abi_layout();

    let memory = wasm_bindgen::memory()
        .dyn_into::<js_sys::WebAssembly::Memory>()
        .expect("wasm memory");
    let colors = js_sys::Uint32Array::new_with_byte_offset_and_length(
        &memory.buffer(),
        layout.colors_ptr(),
        layout.colors_len_elements(),
    );

    assert_eq!(colors.length(), 100);
    for i in 0..colors.length() {
        // Every palette entry is fully opaque ABGR.
        assert_eq!(colors.get_index(i) >> 24, 0xFF);
    }
}

#[wasm_bindgen_test]
fn moisture_view_tracks_a_flood() {
    let mut world = World::new(5);
    world.clear();
    assert!(world.select_tool(tool_bucket()));
    assert!(world.click_cell(0, 0));

    let layout = world.abi_layout();
    let memory = wasm_bindgen::memory()
        .dyn_into::<js_sys::WebAssembly::Memory>()
        .expect("wasm memory");
    let moisture = js_sys::Float32Array::new_with_byte_offset_and_length(
        &memory.buffer(),
        layout.moisture_ptr(),
        layout.moisture_len_elements(),
    );

    assert_eq!(moisture.get_index(0), 1.0);
    assert!((moisture.get_index(1) - 0.8).abs() < 1e-6);
}
