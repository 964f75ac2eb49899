/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Decoding of raw response bodies
pub mod decoder;
/// Response envelopes shared by every endpoint
pub mod responses;
