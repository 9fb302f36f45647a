/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod kurbo_backend;
mod null;
mod software;
mod transformer;

pub use self::kurbo_backend::*;
pub use self::null::*;
pub use self::software::*;
pub use self::transformer::*;
