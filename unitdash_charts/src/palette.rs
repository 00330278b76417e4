// Copyright 2025 the unitdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared panel colors.

use peniko::Color;

pub(crate) const TRACK: Color = Color::from_rgb8(0xe5, 0xe7, 0xeb);
pub(crate) const TRACK_DARK: Color = Color::from_rgb8(0xe2, 0xe8, 0xf0);
pub(crate) const MUTED_TEXT: Color = Color::from_rgb8(0x94, 0xa3, 0xb8);
pub(crate) const BODY_TEXT: Color = Color::from_rgb8(0x47, 0x55, 0x69);
pub(crate) const STRONG_TEXT: Color = Color::from_rgb8(0x1e, 0x29, 0x3b);
pub(crate) const BLUE_400: Color = Color::from_rgb8(0x60, 0xa5, 0xfa);
pub(crate) const BLUE_500: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);
pub(crate) const BLUE_600: Color = Color::from_rgb8(0x25, 0x63, 0xeb);
pub(crate) const BLUE_700: Color = Color::from_rgb8(0x1d, 0x4e, 0xd8);
pub(crate) const GREEN_500: Color = Color::from_rgb8(0x22, 0xc5, 0x5e);
pub(crate) const GRAY_400: Color = Color::from_rgb8(0x9c, 0xa3, 0xaf);
pub(crate) const TEAL_700: Color = Color::from_rgb8(0x0f, 0x76, 0x6e);
pub(crate) const AMBER_700: Color = Color::from_rgb8(0xb4, 0x53, 0x09);
pub(crate) const YELLOW_700: Color = Color::from_rgb8(0xa1, 0x62, 0x07);
