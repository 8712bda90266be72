#![no_main]
use libfuzzer_sys::fuzz_target;
use zentexture::{ChannelFix, DecodeRequest, Limits};

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_memory_bytes: Some(64 << 20),
        ..Default::default()
    };

    // Must never panic, whatever the channel fix
    for fix in [ChannelFix::FirstPixel, ChannelFix::AllPixels, ChannelFix::None] {
        let request = DecodeRequest::new().with_limits(&limits).with_channel_fix(fix);
        if let Ok(buffer) = request.decode(data, enough::Unstoppable) {
            // Sampling any coordinate of a decoded buffer must stay in range
            let _ = zentexture::sample(&buffer, 0.0, 1.0);
            let _ = zentexture::sample(&buffer, -0.25, 7.5);
        }
    }

    let _ = zentexture::bmp::BitmapHeader::parse(data);
});
