/*
Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! The two output-side collaborators spec.md §1 calls thin: scattering
//! each line's already-encoded `code[]` into a flat byte image, and
//! rendering the source-plus-address-plus-code listing text. Neither
//! resolves anything pass 1/pass 2 didn't already resolve.

pub mod listing;
pub mod memory;
