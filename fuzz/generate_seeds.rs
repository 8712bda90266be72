#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp24(width: i32, height: i32, data_size: u32, pixels: &[u8]) -> Vec<u8> {
    let mut bmp = vec![0u8; 54];
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&(54 + pixels.len() as u32).to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&width.to_le_bytes());
    bmp[22..26].copy_from_slice(&height.to_le_bytes());
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[34..38].copy_from_slice(&data_size.to_le_bytes());
    bmp.extend_from_slice(pixels);
    bmp
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 1x1, one pixel + 1 padding byte
    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp24(1, 1, 4, &[0xff, 0x00, 0x00, 0x00])).unwrap();

    // 2x2 top-down
    let px = [1, 2, 3, 4, 5, 6, 0, 0, 7, 8, 9, 10, 11, 12, 0, 0];
    fs::write(format!("{dir}/bmp_2x2_topdown.bmp"), bmp24(2, -2, 16, &px)).unwrap();

    // 3x1 with zero image size field
    fs::write(format!("{dir}/bmp_3x1_nosize.bmp"), bmp24(3, 1, 0, &[0x80; 12])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/bmp_no_pixels.bin"), bmp24(4, 4, 48, &[])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
