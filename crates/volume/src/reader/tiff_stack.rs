//! Page-by-page decoding of grayscale TIFF stacks

// standard library
use std::fs::File;
use std::path::Path;

// crate modules
use crate::error::{Error, Result};

// external crates
use log::debug;
use ndarray::ArrayD;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::ColorType;

/// Decode every page of a TIFF file into one flat stack of `f32` samples
///
/// A single page decodes to a 2D array, matching what flat image readers
/// return; the caller decides whether that is an error. Multiple pages
/// stack to `(pages, height, width)`.
pub(crate) fn read_stack(path: &Path) -> Result<ArrayD<f32>> {
    let mut decoder = Decoder::new(File::open(path)?)?;
    let (width, height) = decoder.dimensions()?;

    let mut pages = 0_usize;
    let mut samples: Vec<f32> = Vec::new();

    loop {
        check_page_layout(&mut decoder, (width, height))?;
        append_page(decoder.read_image()?, &mut samples);
        pages += 1;

        if !decoder.more_images() {
            break;
        }
        decoder.next_image()?;
    }
    debug!("decoded {pages} TIFF page(s) of {width}x{height}");

    let shape = match pages {
        1 => vec![height as usize, width as usize],
        n => vec![n, height as usize, width as usize],
    };
    // Safe to unwrap as every page contributes exactly height*width samples
    Ok(ArrayD::from_shape_vec(shape, samples).unwrap())
}

/// Reject pages that do not line up into a dense stack
fn check_page_layout(decoder: &mut Decoder<File>, expected: (u32, u32)) -> Result<()> {
    let found = decoder.dimensions()?;
    if found != expected {
        return Err(Error::InconsistentPages { expected, found });
    }

    match decoder.colortype()? {
        ColorType::Gray(_) => Ok(()),
        other => Err(Error::UnsupportedColorType(format!("{other:?}"))),
    }
}

/// Convert one decoded page to `f32` and append it to the stack
fn append_page(page: DecodingResult, samples: &mut Vec<f32>) {
    match page {
        DecodingResult::U8(page) => samples.extend(page.iter().map(|&s| s as f32)),
        DecodingResult::U16(page) => samples.extend(page.iter().map(|&s| s as f32)),
        DecodingResult::U32(page) => samples.extend(page.iter().map(|&s| s as f32)),
        DecodingResult::U64(page) => samples.extend(page.iter().map(|&s| s as f32)),
        DecodingResult::I8(page) => samples.extend(page.iter().map(|&s| s as f32)),
        DecodingResult::I16(page) => samples.extend(page.iter().map(|&s| s as f32)),
        DecodingResult::I32(page) => samples.extend(page.iter().map(|&s| s as f32)),
        DecodingResult::I64(page) => samples.extend(page.iter().map(|&s| s as f32)),
        DecodingResult::F32(page) => samples.extend_from_slice(&page),
        DecodingResult::F64(page) => samples.extend(page.iter().map(|&s| s as f32)),
    }
}
