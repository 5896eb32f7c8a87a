//! Synthetic DICOM objects for tests.

use std::path::{Path, PathBuf};

use dicom::core::{DataElement, PrimitiveValue, VR};
use dicom::dictionary_std::tags;
use dicom::object::{FileDicomObject, FileMetaTableBuilder, InMemDicomObject};
use dicom::transfer_syntax::entries::EXPLICIT_VR_LITTLE_ENDIAN;

/// Secondary Capture Image Storage
const SOP_CLASS_UID: &str = "1.2.840.10008.5.1.4.1.1.7";
const SOP_INSTANCE_UID: &str = "2.25.1234567890";

/// Builder for small uncompressed DICOM files.
#[derive(Debug, Clone)]
pub struct DicomFixture {
    width: u16,
    height: u16,
    samples_per_pixel: u16,
    bits_allocated: u16,
    values: Vec<u16>,
    frames: u32,
    rescale: Option<(f64, f64)>,
    pixel_data: bool,
}

impl DicomFixture {
    /// 16-bit MONOCHROME2 image. `values` holds every frame, row-major.
    pub fn monochrome(width: u16, height: u16, values: Vec<u16>) -> Self {
        Self {
            width,
            height,
            samples_per_pixel: 1,
            bits_allocated: 16,
            values,
            frames: 1,
            rescale: None,
            pixel_data: true,
        }
    }

    /// 8-bit interleaved RGB image.
    pub fn rgb(width: u16, height: u16, values: Vec<u8>) -> Self {
        Self {
            width,
            height,
            samples_per_pixel: 3,
            bits_allocated: 8,
            values: values.into_iter().map(u16::from).collect(),
            frames: 1,
            rescale: None,
            pixel_data: true,
        }
    }

    pub fn with_frames(mut self, frames: u32) -> Self {
        self.frames = frames;
        self
    }

    pub fn with_rescale(mut self, slope: f64, intercept: f64) -> Self {
        self.rescale = Some((slope, intercept));
        self
    }

    pub fn without_pixel_data(mut self) -> Self {
        self.pixel_data = false;
        self
    }

    fn put_us(obj: &mut InMemDicomObject, tag: dicom::core::Tag, value: u16) {
        obj.put(DataElement::new(tag, VR::US, PrimitiveValue::from(value)));
    }

    fn pixel_bytes(&self) -> Vec<u8> {
        if self.bits_allocated == 8 {
            self.values.iter().map(|&v| v as u8).collect()
        } else {
            self.values.iter().flat_map(|v| v.to_le_bytes()).collect()
        }
    }

    pub fn to_object(&self) -> FileDicomObject<InMemDicomObject> {
        let mut obj = InMemDicomObject::new_empty();
        obj.put(DataElement::new(
            tags::SOP_CLASS_UID,
            VR::UI,
            PrimitiveValue::from(SOP_CLASS_UID),
        ));
        obj.put(DataElement::new(
            tags::SOP_INSTANCE_UID,
            VR::UI,
            PrimitiveValue::from(SOP_INSTANCE_UID),
        ));
        obj.put(DataElement::new(
            tags::PHOTOMETRIC_INTERPRETATION,
            VR::CS,
            PrimitiveValue::from(if self.samples_per_pixel == 3 {
                "RGB"
            } else {
                "MONOCHROME2"
            }),
        ));
        Self::put_us(&mut obj, tags::SAMPLES_PER_PIXEL, self.samples_per_pixel);
        Self::put_us(&mut obj, tags::ROWS, self.height);
        Self::put_us(&mut obj, tags::COLUMNS, self.width);
        Self::put_us(&mut obj, tags::BITS_ALLOCATED, self.bits_allocated);
        Self::put_us(&mut obj, tags::BITS_STORED, self.bits_allocated);
        Self::put_us(&mut obj, tags::HIGH_BIT, self.bits_allocated - 1);
        Self::put_us(&mut obj, tags::PIXEL_REPRESENTATION, 0);
        if self.samples_per_pixel == 3 {
            Self::put_us(&mut obj, tags::PLANAR_CONFIGURATION, 0);
        }
        if self.frames > 1 {
            obj.put(DataElement::new(
                tags::NUMBER_OF_FRAMES,
                VR::IS,
                PrimitiveValue::from(self.frames.to_string()),
            ));
        }
        if let Some((slope, intercept)) = self.rescale {
            obj.put(DataElement::new(
                tags::RESCALE_SLOPE,
                VR::DS,
                PrimitiveValue::from(slope.to_string()),
            ));
            obj.put(DataElement::new(
                tags::RESCALE_INTERCEPT,
                VR::DS,
                PrimitiveValue::from(intercept.to_string()),
            ));
        }
        if self.pixel_data {
            let vr = if self.bits_allocated > 8 { VR::OW } else { VR::OB };
            obj.put(DataElement::new(
                tags::PIXEL_DATA,
                vr,
                PrimitiveValue::from(self.pixel_bytes()),
            ));
        }

        obj.with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(EXPLICIT_VR_LITTLE_ENDIAN.uid())
                .media_storage_sop_class_uid(SOP_CLASS_UID)
                .media_storage_sop_instance_uid(SOP_INSTANCE_UID),
        )
        .expect("fixture file meta table should build")
    }

    /// Writes the fixture as a standard DICOM file (preamble included).
    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        self.to_object()
            .write_to_file(&path)
            .expect("fixture should be writable");
        path
    }

    /// Bytes of a standard DICOM file holding this fixture.
    pub fn to_bytes(&self) -> Vec<u8> {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = self.write_to(dir.path(), "fixture.dcm");
        std::fs::read(path).expect("fixture should be readable")
    }
}
