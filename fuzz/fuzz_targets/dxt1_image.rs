#![no_main]

// Runs whole images through both execution modes and checks they agree.

use dxt1_codec_api::{Dxt1Error, Dxt1ImageCodecBuilder, Execution};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct ImageInput {
    pub width: u8,
    pub height: u8,
    pub data: Vec<u8>,
}

fuzz_target!(|input: ImageInput| {
    let (width, height) = (input.width as usize, input.height as usize);
    let serial = Dxt1ImageCodecBuilder::new().execution(Execution::Serial);
    let parallel = Dxt1ImageCodecBuilder::new().execution(Execution::Parallel);

    let mut serial_out = vec![0u8; width * height * 4];
    let mut parallel_out = serial_out.clone();
    let serial_result = serial.decompress(width, height, &input.data, &mut serial_out);
    let parallel_result = parallel.decompress(width, height, &input.data, &mut parallel_out);

    assert_eq!(serial_result, parallel_result);
    assert_eq!(serial_out, parallel_out);

    match serial_result {
        Ok(()) => assert!(serial_out.chunks_exact(4).all(|pixel| pixel[3] == 255)),
        Err(Dxt1Error::InvalidDimensions { .. }) => {
            assert!(width == 0 || height == 0 || width % 4 != 0 || height % 4 != 0)
        }
        Err(Dxt1Error::BufferTooSmall { needed, actual, .. }) => assert!(actual < needed),
    }
});
