// Copyright 2026 the Float Label Authors
// SPDX-License-Identifier: Apache-2.0

//! The child elements owned by the composite.

mod caption_label;
mod text_field;

pub use caption_label::CaptionLabel;
pub use text_field::TextField;
