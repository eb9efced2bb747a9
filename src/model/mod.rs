/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Header preparation, request sending and response classification
pub mod http;
/// Request options and payloads
pub mod requests;
/// Failure and token response models
pub mod responses;
